//! Shared test utilities for the nbsite test suite.
//!
//! Tests get an isolated copy of `fixtures/` (a two-chapter course with one
//! ancillary notebook, plus minimal templates) in a temp directory they can
//! mutate freely, and a [`SiteConfig`] whose paths point into that copy.

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;

/// Copy `fixtures/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// A config whose directories point into the fixture copy.
pub fn fixture_config(tmp: &TempDir) -> SiteConfig {
    SiteConfig {
        root: "cfm".to_string(),
        nbs_dir: tmp.path().join("nbs").display().to_string(),
        templates_dir: tmp.path().join("templates").display().to_string(),
        output_dir: tmp.path().join("dist").display().to_string(),
        exclude_tags: vec!["solution".to_string()],
    }
}

/// Read a generated page relative to the fixture output directory.
/// Panics with the path on a miss.
pub fn read_page(tmp: &TempDir, rel: &str) -> String {
    let path = tmp.path().join("dist").join(rel);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("page '{}' not readable: {e}", path.display()))
}
