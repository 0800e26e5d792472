pub mod html;
pub mod markdown;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::RenderPaths;
use crate::model::SubmissionRecord;
use crate::model::rank::parse_timestamp;

/// `YYYY-MM-DD HH:MM` when the timestamp parses, the raw trimmed
/// string otherwise. An explicit offset keeps its own clock face.
pub fn format_timestamp_display(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

pub fn write_reports(records: &[SubmissionRecord], paths: &RenderPaths) -> std::io::Result<()> {
    let markdown = markdown::render_markdown(records);
    write_text(&paths.markdown_out, &markdown)?;

    let page = html::render_page(records);
    write_text(&paths.html_out, &page)?;

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}
