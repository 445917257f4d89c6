//! # nbsite
//!
//! A minimal static site generator for Jupyter notebook course sites.
//! Your filesystem is the data source: `nbs/chapters/` holds the ordered
//! course chapters, `nbs/other/` holds ancillary documents, and a
//! `templates/` directory supplies the page shells.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      nbs/       →  manifest.json   (filesystem → structured data)
//! 2. Generate  manifest   →  dist/           (final HTML site)
//! ```
//!
//! The scan manifest is human-readable JSON you can inspect between stages;
//! generation is a pure function of the manifest and the config, so tests
//! can exercise either stage in isolation.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists both collections, derives ids and names, produces the manifest |
//! | [`generate`] | Stage 2 — circular navigation, page assembly, aggregate pages |
//! | [`notebook`] | ipynb parsing, cell-tag filtering, in-memory HTML conversion |
//! | [`templates`] | minijinja engine over the site's `templates/` directory |
//! | [`naming`] | `id-Name` filename convention parser |
//! | [`config`] | `site.toml` loading and validation |
//! | [`types`] | Shared records serialized in the manifest (`DocEntry`, `Chapter`) |
//! | [`output`] | CLI output formatting — indexed inventory of pipeline results |
//!
//! # Design Decisions
//!
//! ## Circular Navigation
//!
//! Previous/next links within a collection wrap around: the first chapter's
//! "previous" is the last chapter, and vice versa, so a reader paging
//! through the course never hits a dead end. A collection of one links to
//! itself. The rule is a single modulo computation in
//! [`generate::circular_neighbors`].
//!
//! ## File Templates Over Compile-Time HTML
//!
//! Pages are rendered through [minijinja](https://docs.rs/minijinja) from a
//! `templates/` directory shipped with the site. Course authors edit
//! `content.html`, `home.html`, and `chapters.html` without recompiling;
//! the binary only fixes the variable contract.
//!
//! ## In-Memory Conversion
//!
//! Notebooks are parsed, filtered, and rendered to HTML fragments entirely
//! in memory — no temporary files, no external exporter process. Cells are
//! rendered as stored; nothing is ever executed.
//!
//! ## Dash-Prefix Ids
//!
//! Chapter files use an ordering prefix before the first dash
//! (`01-Introduction.ipynb` → directory `01`, title "Introduction").
//! Unprefixed files fall back to a slug of the whole stem. The filesystem
//! is the source of truth; no database, no front-matter, no separate
//! ordering file.

pub mod config;
pub mod generate;
pub mod naming;
pub mod notebook;
pub mod output;
pub mod scan;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
