//! Site configuration module.
//!
//! Handles loading and validating `site.toml`. Configuration is flat: stock
//! defaults are overridden by a single optional file at the project root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root = "cfm"                 # Site root substituted for the {{root}} token
//! nbs_dir = "nbs"              # Input root containing chapters/ and other/
//! templates_dir = "templates"  # Template search directory
//! output_dir = "dist"          # Where the generated site is written
//! exclude_tags = ["solution"]  # Cells carrying any of these tags are dropped
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.
//!
//! The site root is deliberately a config value threaded into rendering, not
//! a module-wide constant: every consumer receives it explicitly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site root substituted for the `{{root}}` token in converted notebooks
    /// and passed to every template as `root`.
    pub root: String,
    /// Input root directory containing the `chapters/` and `other/`
    /// collections.
    pub nbs_dir: String,
    /// Directory searched for `content.html`, `home.html`, `chapters.html`.
    pub templates_dir: String,
    /// Output directory for the generated site.
    pub output_dir: String,
    /// Cells whose metadata tags intersect this set are dropped before
    /// conversion.
    pub exclude_tags: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "cfm".to_string(),
            nbs_dir: "nbs".to_string(),
            templates_dir: "templates".to_string(),
            output_dir: "dist".to_string(),
            exclude_tags: vec!["solution".to_string()],
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("nbs_dir", &self.nbs_dir),
            ("templates_dir", &self.templates_dir),
            ("output_dir", &self.output_dir),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{field} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Load `site.toml` from the given path, falling back to stock defaults when
/// the file does not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock `site.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# nbsite configuration. Every option is optional; the values below are
# the stock defaults. Unknown keys are rejected.

# Site root substituted for the {{{{root}}}} token in notebook content and
# passed to templates as `root`.
root = "{root}"

# Input root containing chapters/ and other/ with .ipynb files.
nbs_dir = "{nbs}"

# Directory searched for content.html, home.html, chapters.html.
templates_dir = "{templates}"

# Output directory for the generated site.
output_dir = "{output}"

# Cells carrying any of these metadata tags are dropped before conversion.
exclude_tags = ["solution"]
"#,
        root = defaults.root,
        nbs = defaults.nbs_dir,
        templates = defaults.templates_dir,
        output = defaults.output_dir,
    )
}
