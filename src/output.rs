//! CLI output formatting for the pipeline stages.
//!
//! Output is information-centric: the primary display for every document is
//! its positional index and display name, with filesystem paths as indented
//! `Source:` context lines.
//!
//! ## Scan
//!
//! ```text
//! Chapters
//! 001 Introduction
//!     Source: nbs/chapters/01-Introduction.ipynb
//! 002 Linear Models
//!     Source: nbs/chapters/03-Linear-Models.ipynb
//!
//! Other
//! 001 Reading List
//!     Source: nbs/other/Reading List.ipynb
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Chapter listing → chapters/index.html
//! 001 Introduction → chapters/01/index.html
//! 002 Linear Models → chapters/03/index.html
//!
//! Other
//! 001 Reading List → other/reading-list/index.html
//!
//! Generated 2 chapter pages, 1 other page
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::Manifest;
use crate::types::DocEntry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header + indented source line for one document.
fn entry_lines(index: usize, entry: &DocEntry) -> Vec<String> {
    vec![
        format!("{} {}", format_index(index), entry.name),
        format!("    Source: {}", entry.source.display()),
    ]
}

pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Chapters".to_string());
    for (i, entry) in manifest.chapters.iter().enumerate() {
        lines.extend(entry_lines(i + 1, entry));
    }

    lines.push(String::new());
    lines.push("Other".to_string());
    for (i, entry) in manifest.other.iter().enumerate() {
        lines.extend(entry_lines(i + 1, entry));
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());
    lines.push("Chapter listing → chapters/index.html".to_string());
    for (i, entry) in manifest.chapters.iter().enumerate() {
        lines.push(format!(
            "{} {} → chapters/{}/index.html",
            format_index(i + 1),
            entry.name,
            entry.id
        ));
    }

    lines.push(String::new());
    lines.push("Other".to_string());
    for (i, entry) in manifest.other.iter().enumerate() {
        lines.push(format!(
            "{} {} → other/{}/index.html",
            format_index(i + 1),
            entry.name,
            entry.id
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} chapter page{}, {} other page{}",
        manifest.chapters.len(),
        plural(manifest.chapters.len()),
        manifest.other.len(),
        plural(manifest.other.len()),
    ));

    lines
}

pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
