//! Centralized filename parsing for the `id-Name` convention.
//!
//! Every notebook follows the same naming pattern: an ordering prefix before
//! the first dash (`01-Introduction.ipynb`) or, for unprefixed files, the
//! whole stem. This module derives both the directory id and the display
//! name from a stem in one place so the scan and generate stages agree.
//!
//! ## Derivation Rules
//!
//! - `01-Introduction` → id `01`, name "Introduction"
//! - `03-Linear-Models` → id `03`, name "Linear Models" (dashes become spaces)
//! - `syllabus` → id `syllabus`, name "syllabus" (no dash: slug + raw stem)
//! - `Reading List` → id `reading-list`, name "Reading List"
//!
//! The rule is an explicit two-branch test on dash presence. No uniqueness
//! or character-legality validation happens here; a malformed stem produces
//! a malformed directory name downstream.

/// Result of parsing a notebook filename stem.
#[derive(Debug, Clone, PartialEq)]
pub struct DocName {
    /// Directory id: prefix before the first dash, or the slugified stem.
    pub id: String,
    /// Display name: remainder after the prefix with dashes as spaces,
    /// or the raw stem when there is no dash.
    pub name: String,
}

/// Parse a filename stem into its `(id, name)` pair.
///
/// Handles these patterns:
/// - `"01-Introduction"` → id="01", name="Introduction"
/// - `"03-Linear-Models"` → id="03", name="Linear Models"
/// - `"01-"` → id="01", name=""
/// - `"syllabus"` → id="syllabus", name="syllabus"
/// - `"Reading List"` → id="reading-list", name="Reading List"
pub fn parse_doc_name(stem: &str) -> DocName {
    if let Some(dash_pos) = stem.find('-') {
        let id = &stem[..dash_pos];
        // Keep the dash itself in the tail: once every dash becomes a
        // space, the leading one trims away and interior ones separate words.
        let name = stem[dash_pos..].replace('-', " ");
        return DocName {
            id: id.to_string(),
            name: name.trim_start().to_string(),
        };
    }
    DocName {
        id: slugify(stem),
        name: stem.to_string(),
    }
}

/// Lowercase a stem into a path-segment-safe slug: spaces become dashes,
/// commas are dropped.
fn slugify(stem: &str) -> String {
    stem.to_lowercase().replace(' ', "-").replace(',', "")
}
