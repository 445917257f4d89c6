//! Notebook discovery and collection ordering.
//!
//! Stage 1 of the nbsite build pipeline. Lists the two fixed collections
//! under the input root and produces a structured manifest that the generate
//! stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! nbs/                             # Input root (config: nbs_dir)
//! ├── chapters/                    # Ordered course chapters
//! │   ├── 01-Introduction.ipynb
//! │   ├── 02-Gradients.ipynb
//! │   └── 03-Linear-Models.ipynb
//! └── other/                       # Ancillary documents
//!     ├── syllabus.ipynb
//!     └── Reading List.ipynb
//! ```
//!
//! ## Ordering
//!
//! Each collection is sorted lexicographically by path; that order defines
//! both the circular previous/next adjacency and the chapter listing. Ids
//! and display names are derived per [`crate::naming`]. Id collisions within
//! a collection are not detected — the later document overwrites the
//! earlier one's output directory.

use crate::naming::parse_doc_name;
use crate::types::{Chapter, DocEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("collection directory not found: {0}")]
    MissingCollection(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub chapters: Vec<DocEntry>,
    pub other: Vec<DocEntry>,
}

impl Manifest {
    /// Chapter records for the aggregate page templates, in collection order.
    pub fn chapter_records(&self) -> Vec<Chapter> {
        self.chapters.iter().map(Chapter::from).collect()
    }
}

pub fn scan(nbs_dir: &Path) -> Result<Manifest, ScanError> {
    Ok(Manifest {
        chapters: scan_collection(&nbs_dir.join("chapters"))?,
        other: scan_collection(&nbs_dir.join("other"))?,
    })
}

fn scan_collection(dir: &Path) -> Result<Vec<DocEntry>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingCollection(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("ipynb"))
                    .unwrap_or(false)
        })
        .collect();

    paths.sort();

    Ok(paths.iter().map(|p| doc_entry(p)).collect())
}

/// Build a document entry from a notebook path.
fn doc_entry(path: &Path) -> DocEntry {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let parsed = parse_doc_name(&stem);
    DocEntry {
        id: parsed.id,
        name: parsed.name,
        source: path.to_path_buf(),
    }
}
