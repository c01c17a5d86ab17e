//! # Document Export
//!
//! Wraps a section's rendered table in a standalone A4 page with a centered
//! heading naming the section. Re-exporting a section simply produces the
//! document again from the latest table.

use std::fs;
use std::path::{Path, PathBuf};

use maud::{html, Markup, PreEscaped, DOCTYPE};
use timetable_core::errors::{TimetableError, TimetableResult};
use tracing::{error, info};

pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

const PAGE_CSS: &str = r#"
@page { size: A4 portrait; margin: 10mm; }
body { font-family: sans-serif; margin: 0; }
h1.heading { font-size: 18pt; text-align: center; margin: 10mm 0 5mm; }
table.timetable { width: 100%; border-collapse: collapse; }
table.timetable th, table.timetable td { border: 1px solid #444; padding: 4px; font-size: 9pt; }
td.day { font-weight: bold; }
td.lunch { background-color: #f0ad4e; color: white; text-align: center; }
td.free { color: #777; }
"#;

/// A finished export ready to be downloaded or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub body: String,
}

impl ExportedDocument {
    /// Writes the document into `dir`, replacing any earlier export.
    pub fn write_to(&self, dir: &Path) -> TimetableResult<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body).map_err(|err| {
            error!(path = %path.display(), "Error writing export: {}", err);
            TimetableError::ExportEncodingFailure(format!(
                "could not write {}: {}",
                path.display(),
                err
            ))
        })?;
        info!(path = %path.display(), "Exported timetable");
        Ok(path)
    }
}

pub fn heading(section: &str) -> String {
    format!("Timetable for Section {}", section)
}

pub fn file_name(section: &str) -> String {
    format!("Timetable_Section{}.html", section)
}

/// Exports the rendered table of `section`.
///
/// Fails with `MissingExportTarget` when the section has no rendered table.
pub fn export_section(section: &str, table_html: Option<&str>) -> TimetableResult<ExportedDocument> {
    let table_html =
        table_html.ok_or_else(|| TimetableError::MissingExportTarget(section.to_string()))?;

    Ok(ExportedDocument {
        file_name: file_name(section),
        body: page(section, table_html).into_string(),
    })
}

fn page(section: &str, table_html: &str) -> Markup {
    let title = heading(section);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                h1.heading { (title) }
                // The table was produced by `render`, so it is already escaped
                (PreEscaped(table_html))
            }
        }
    }
}
