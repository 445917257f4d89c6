//! Shared types used across the pipeline stages.
//!
//! These types are serialized into the scan manifest (scan → generate) and
//! must stay identical across both modules.

use serde::{Deserialize, Serialize};

/// A discovered notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocEntry {
    /// Directory id derived from the filename stem (prefix before the first
    /// dash, or the slugified stem).
    pub id: String,
    /// Display name (stem tail with dashes as spaces, or the raw stem).
    pub name: String,
    /// Path to the source `.ipynb` file.
    pub source: std::path::PathBuf,
}

/// A chapter record consumed by the home and chapter-listing templates.
///
/// Field names are part of the template contract: `home.html` and
/// `chapters.html` address `chapter.dir`, `chapter.title`, `chapter.source`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Output directory name (the document id).
    pub dir: String,
    /// Display title (the document name).
    pub title: String,
    /// Source notebook path, as a string for template interpolation.
    pub source: String,
}

impl From<&DocEntry> for Chapter {
    fn from(entry: &DocEntry) -> Self {
        Chapter {
            dir: entry.id.clone(),
            title: entry.name.clone(),
            source: entry.source.display().to_string(),
        }
    }
}
