//! Notebook parsing and HTML conversion.
//!
//! A notebook is a JSON document with an ordered `cells` list; each cell has
//! a type, a source (a string or a list of line strings), optional metadata
//! tags, and — for code cells — recorded outputs. This module deserializes
//! that structure, drops cells whose tags intersect the configured exclusion
//! set, and renders the remainder to an HTML fragment entirely in memory.
//!
//! ## Conversion Contract
//!
//! - markdown cells → HTML via pulldown-cmark
//! - code cells → escaped `<pre>` input followed by recorded outputs
//!   (stream text, `text/html` passthrough, `image/png` data URIs,
//!   `text/plain` fallback, error name/value)
//! - raw cells are skipped
//!
//! Cells are rendered as stored; nothing is executed. A parse error is
//! fatal and propagates to the caller — there are no partial-failure
//! semantics for a malformed document.

use pulldown_cmark::{Options, Parser, html as md_html};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed notebook document. Only the cell list matters here; the rest of
/// the notebook metadata is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Markdown,
    Code,
    Raw,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(default)]
    pub metadata: CellMetadata,
    #[serde(default)]
    pub source: SourceText,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellMetadata {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Notebook text fields are either a plain string or a list of line strings;
/// the lines already carry their trailing newlines, so joining is plain
/// concatenation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Single(String),
    Lines(Vec<String>),
}

impl SourceText {
    pub fn text(&self) -> String {
        match self {
            SourceText::Single(s) => s.clone(),
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Single(String::new())
    }
}

/// A recorded code-cell output.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    Stream {
        #[serde(default)]
        text: SourceText,
    },
    ExecuteResult {
        #[serde(default)]
        data: MimeBundle,
    },
    DisplayData {
        #[serde(default)]
        data: MimeBundle,
    },
    Error {
        #[serde(default)]
        ename: String,
        #[serde(default)]
        evalue: String,
    },
    #[serde(other)]
    Unknown,
}

/// The mime types rendered from rich outputs, richest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MimeBundle {
    #[serde(rename = "text/html", default)]
    pub html: Option<SourceText>,
    #[serde(rename = "image/png", default)]
    pub png: Option<SourceText>,
    #[serde(rename = "text/plain", default)]
    pub plain: Option<SourceText>,
}

/// Parse a notebook from its raw JSON text.
pub fn parse(raw: &str) -> Result<Notebook, NotebookError> {
    Ok(serde_json::from_str(raw)?)
}

/// Drop every cell whose metadata tags intersect `exclude_tags`. Untagged
/// cells and cells with disjoint tags survive.
pub fn filter_cells(nb: &mut Notebook, exclude_tags: &[String]) {
    nb.cells
        .retain(|cell| cell.metadata.tags.iter().all(|t| !exclude_tags.contains(t)));
}

/// Read a notebook file, filter excluded cells, and render the remainder to
/// an HTML fragment.
pub fn convert(path: &Path, exclude_tags: &[String]) -> Result<String, NotebookError> {
    let raw = fs::read_to_string(path)?;
    let mut nb = parse(&raw)?;
    filter_cells(&mut nb, exclude_tags);
    Ok(render_fragment(&nb))
}

/// Render a notebook's cells to an HTML fragment, in cell order.
pub fn render_fragment(nb: &Notebook) -> String {
    let mut html = String::new();
    for cell in &nb.cells {
        match cell.cell_type {
            CellType::Markdown => render_markdown_cell(&mut html, cell),
            CellType::Code => render_code_cell(&mut html, cell),
            CellType::Raw | CellType::Other => {}
        }
    }
    html
}

fn render_markdown_cell(out: &mut String, cell: &Cell) {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let source = cell.source.text();
    let parser = Parser::new_ext(&source, options);

    out.push_str("<div class=\"cell markdown-cell\">\n");
    md_html::push_html(out, parser);
    out.push_str("</div>\n");
}

fn render_code_cell(out: &mut String, cell: &Cell) {
    out.push_str("<div class=\"cell code-cell\">\n");
    out.push_str("<div class=\"input highlight\"><pre>");
    escape_html(out, &cell.source.text());
    out.push_str("</pre></div>\n");

    for output in &cell.outputs {
        render_output(out, output);
    }

    out.push_str("</div>\n");
}

fn render_output(out: &mut String, output: &Output) {
    match output {
        Output::Stream { text } => {
            out.push_str("<div class=\"output output-stream\"><pre>");
            escape_html(out, &text.text());
            out.push_str("</pre></div>\n");
        }
        Output::ExecuteResult { data } | Output::DisplayData { data } => {
            render_mime_bundle(out, data);
        }
        Output::Error { ename, evalue } => {
            out.push_str("<div class=\"output output-error\"><pre>");
            escape_html(out, &format!("{ename}: {evalue}"));
            out.push_str("</pre></div>\n");
        }
        Output::Unknown => {}
    }
}

fn render_mime_bundle(out: &mut String, data: &MimeBundle) {
    if let Some(html) = &data.html {
        out.push_str("<div class=\"output output-html\">\n");
        out.push_str(&html.text());
        out.push_str("</div>\n");
    } else if let Some(png) = &data.png {
        // Base64 payloads may be stored as newline-chunked lines.
        let encoded = png.text().replace('\n', "");
        out.push_str("<div class=\"output output-image\">");
        out.push_str("<img src=\"data:image/png;base64,");
        out.push_str(&encoded);
        out.push_str("\" alt=\"output\"></div>\n");
    } else if let Some(plain) = &data.plain {
        out.push_str("<div class=\"output output-text\"><pre>");
        escape_html(out, &plain.text());
        out.push_str("</pre></div>\n");
    }
}

/// Minimal HTML escaping for text placed inside `<pre>` and attributes.
fn escape_html(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": ["# Title\n", "\n", "Some **bold** text.\n"]
            },
            {
                "cell_type": "code",
                "execution_count": 1,
                "metadata": {"tags": ["keep-me"]},
                "outputs": [
                    {"output_type": "stream", "name": "stdout", "text": ["hello\n"]}
                ],
                "source": "print(\"<hello>\")"
            },
            {
                "cell_type": "markdown",
                "metadata": {"tags": ["solution"]},
                "source": "The hidden answer."
            },
            {
                "cell_type": "raw",
                "metadata": {},
                "source": "raw payload"
            }
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5
    }"##;

    fn solution_tags() -> Vec<String> {
        vec!["solution".to_string()]
    }

    #[test]
    fn parses_string_and_line_list_sources() {
        let nb = parse(SAMPLE).unwrap();
        assert_eq!(nb.cells.len(), 4);
        assert_eq!(nb.cells[0].source.text(), "# Title\n\nSome **bold** text.\n");
        assert_eq!(nb.cells[1].source.text(), "print(\"<hello>\")");
    }

    #[test]
    fn filter_drops_tagged_cells_only() {
        let mut nb = parse(SAMPLE).unwrap();
        filter_cells(&mut nb, &solution_tags());
        assert_eq!(nb.cells.len(), 3);
        assert!(
            nb.cells
                .iter()
                .all(|c| !c.metadata.tags.contains(&"solution".to_string()))
        );
    }

    #[test]
    fn filter_keeps_cells_with_disjoint_tags() {
        let mut nb = parse(SAMPLE).unwrap();
        filter_cells(&mut nb, &solution_tags());
        assert!(
            nb.cells
                .iter()
                .any(|c| c.metadata.tags.contains(&"keep-me".to_string()))
        );
    }

    #[test]
    fn markdown_cell_renders_to_html() {
        let nb = parse(SAMPLE).unwrap();
        let html = render_fragment(&nb);
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn code_cell_input_is_escaped() {
        let nb = parse(SAMPLE).unwrap();
        let html = render_fragment(&nb);
        assert!(html.contains("print(&quot;&lt;hello&gt;&quot;)"));
        assert!(!html.contains("print(\"<hello>\")"));
    }

    #[test]
    fn stream_output_is_rendered() {
        let nb = parse(SAMPLE).unwrap();
        let html = render_fragment(&nb);
        assert!(html.contains("output-stream"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn raw_cells_are_skipped() {
        let nb = parse(SAMPLE).unwrap();
        let html = render_fragment(&nb);
        assert!(!html.contains("raw payload"));
    }

    #[test]
    fn solution_cell_absent_from_converted_fragment() {
        let mut nb = parse(SAMPLE).unwrap();
        filter_cells(&mut nb, &solution_tags());
        let html = render_fragment(&nb);
        assert!(!html.contains("hidden answer"));
    }

    #[test]
    fn html_output_passes_through() {
        let raw = r#"{
            "cells": [{
                "cell_type": "code",
                "metadata": {},
                "outputs": [{
                    "output_type": "execute_result",
                    "data": {
                        "text/html": ["<table><tr><td>1</td></tr></table>"],
                        "text/plain": ["   a\n0  1"]
                    },
                    "metadata": {},
                    "execution_count": 2
                }],
                "source": "df"
            }]
        }"#;
        let nb = parse(raw).unwrap();
        let html = render_fragment(&nb);
        assert!(html.contains("<table><tr><td>1</td></tr></table>"));
        // html wins over the plain fallback
        assert!(!html.contains("output-text"));
    }

    #[test]
    fn png_output_becomes_data_uri() {
        let raw = r#"{
            "cells": [{
                "cell_type": "code",
                "metadata": {},
                "outputs": [{
                    "output_type": "display_data",
                    "data": {"image/png": "aGVsbG8=\n"},
                    "metadata": {}
                }],
                "source": "plot()"
            }]
        }"#;
        let nb = parse(raw).unwrap();
        let html = render_fragment(&nb);
        assert!(html.contains("data:image/png;base64,aGVsbG8="));
        assert!(!html.contains("aGVsbG8=\n"));
    }

    #[test]
    fn error_output_shows_name_and_value() {
        let raw = r#"{
            "cells": [{
                "cell_type": "code",
                "metadata": {},
                "outputs": [{
                    "output_type": "error",
                    "ename": "ValueError",
                    "evalue": "bad input",
                    "traceback": ["..."]
                }],
                "source": "boom()"
            }]
        }"#;
        let nb = parse(raw).unwrap();
        let html = render_fragment(&nb);
        assert!(html.contains("ValueError: bad input"));
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(matches!(
            parse("{not json"),
            Err(NotebookError::Json(_))
        ));
    }

    #[test]
    fn missing_cells_key_is_fatal() {
        assert!(parse(r#"{"metadata": {}}"#).is_err());
    }
}
