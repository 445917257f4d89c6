//! Template rendering over the site's `templates/` directory.
//!
//! The site ships three templates resolved by name at runtime:
//! `content.html` (per-document page), `home.html`, and `chapters.html`
//! (aggregate pages). Lookup and substitution are minijinja's; undefined
//! variables follow its default lenient behavior and are not handled
//! specially here. A missing template file is an error.

use minijinja::{Environment, path_loader};
use serde::Serialize;
use std::path::Path;

use crate::types::Chapter;

/// Context for `content.html`: one rendered document plus its circular
/// navigation neighbors.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Converted notebook HTML fragment.
    pub nb: String,
    /// Site root.
    pub root: String,
    /// This document's id.
    pub id: String,
    /// Previous document's id within the collection.
    pub previous_url: Option<String>,
    /// Next document's id within the collection.
    pub next_url: Option<String>,
}

/// Context for `home.html` and `chapters.html`: the ordered chapter list.
#[derive(Debug, Clone, Serialize)]
pub struct ListingContext {
    pub chapters: Vec<Chapter>,
    pub root: String,
}

/// Template engine with a file-system loader on the search directory.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new(search_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(search_dir));
        Self { env }
    }

    /// Render the named template with the given context.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
