//! HTML site generation.
//!
//! Stage 2 of the nbsite build pipeline. Takes the scan manifest and writes
//! the final static site.
//!
//! ## Generated Pages
//!
//! - **Document pages** (`/{collection}/{id}/index.html`): converted notebook
//!   wrapped in `content.html`, with circular previous/next ids
//! - **Home page** (`/index.html`): chapter listing from `home.html`
//! - **Chapter listing** (`/chapters/index.html`): from `chapters.html`
//!
//! ## Navigation
//!
//! Adjacency within a collection is circular: neighbors are taken modulo the
//! collection length, so the first document's previous is the last and the
//! last's next is the first. A single-document collection links to itself.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home page
//! ├── chapters/
//! │   ├── index.html             # Chapter listing
//! │   ├── 01/index.html
//! │   └── 02/index.html
//! └── other/
//!     └── syllabus/index.html
//! ```
//!
//! Processing is strictly sequential in collection order; the first failure
//! aborts the run with the partial output left in place.

use crate::config::SiteConfig;
use crate::notebook::{self, NotebookError};
use crate::scan::Manifest;
use crate::templates::{ListingContext, PageContext, TemplateEngine};
use crate::types::DocEntry;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("notebook conversion error: {0}")]
    Notebook(#[from] NotebookError),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Previous/next indices for position `index` in a collection of `len`
/// documents, taken modulo `len`. For `len == 1` both neighbors are the
/// element itself.
///
/// `len` must be non-zero; callers iterate existing collections.
pub fn circular_neighbors(len: usize, index: usize) -> (usize, usize) {
    ((index + len - 1) % len, (index + 1) % len)
}

/// Assemble one document page: ensure `<dir>/<id>/` exists, convert the
/// notebook, substitute the `{{root}}` token, render `content.html`, and
/// write `index.html`. Re-running over an existing directory overwrites the
/// page in place.
pub fn make_dir(
    engine: &TemplateEngine,
    config: &SiteConfig,
    entry: &DocEntry,
    directory: &Path,
    previous_url: Option<&str>,
    next_url: Option<&str>,
) -> Result<(), GenerateError> {
    let page_dir = directory.join(&entry.id);
    fs::create_dir_all(&page_dir)?;

    let fragment = notebook::convert(&entry.source, &config.exclude_tags)?;
    // Markdown rendering percent-encodes braces inside link targets, so the
    // root token appears both literally and encoded.
    let fragment = fragment
        .replace("{{root}}", &config.root)
        .replace("%7B%7Broot%7D%7D", &config.root);

    let html = engine.render(
        "content.html",
        PageContext {
            nb: fragment,
            root: config.root.clone(),
            id: entry.id.clone(),
            previous_url: previous_url.map(str::to_string),
            next_url: next_url.map(str::to_string),
        },
    )?;

    fs::write(page_dir.join("index.html"), html)?;
    Ok(())
}

/// Assemble every page of a collection in list order, wiring each document
/// to its circular neighbors' ids.
pub fn make_collection(
    engine: &TemplateEngine,
    config: &SiteConfig,
    entries: &[DocEntry],
    directory: &Path,
) -> Result<(), GenerateError> {
    for (index, entry) in entries.iter().enumerate() {
        let (prev, next) = circular_neighbors(entries.len(), index);
        make_dir(
            engine,
            config,
            entry,
            directory,
            Some(entries[prev].id.as_str()),
            Some(entries[next].id.as_str()),
        )?;
    }
    Ok(())
}

/// Generate the full site from a scan manifest: both collections, then the
/// home and chapter-listing pages.
pub fn generate(manifest: &Manifest, config: &SiteConfig) -> Result<(), GenerateError> {
    let engine = TemplateEngine::new(Path::new(&config.templates_dir));
    let out = Path::new(&config.output_dir);
    fs::create_dir_all(out)?;

    make_collection(&engine, config, &manifest.chapters, &out.join("chapters"))?;
    make_collection(&engine, config, &manifest.other, &out.join("other"))?;

    let listing = ListingContext {
        chapters: manifest.chapter_records(),
        root: config.root.clone(),
    };

    let home = engine.render("home.html", &listing)?;
    fs::write(out.join("index.html"), home)?;

    // The chapters directory exists already unless the collection was empty.
    fs::create_dir_all(out.join("chapters"))?;
    let chapters = engine.render("chapters.html", &listing)?;
    fs::write(out.join("chapters").join("index.html"), chapters)?;

    Ok(())
}
