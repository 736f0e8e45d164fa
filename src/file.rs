// src/file.rs
//
// Output boundary for the CLI: turn a filtered view into text/HTML/JSON and
// write it to stdout or a file.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::options::{OutputFormat, OutputOptions},
    filter::FilteredView,
    render::{present, HtmlView, TextView},
};

pub const DEFAULT_OUT_STEM: &str = "resultados";

/// Render the view in the requested format.
pub fn to_export_string(format: OutputFormat, view: &FilteredView<'_>) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Text => {
            let mut tv = TextView::new();
            present(&mut tv, view.records());
            tv.into_string()
        }
        OutputFormat::Html => {
            let mut hv = HtmlView::new();
            present(&mut hv, view.records());
            hv.into_string()
        }
        OutputFormat::Json => {
            let records: Vec<_> = view.records().collect();
            let mut s = serde_json::to_string_pretty(&records)?;
            s.push('\n');
            s
        }
    })
}

/// Write `contents` where `output` says. Returns the file written, or None
/// for stdout.
pub fn write_output(output: &OutputOptions, contents: &str) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let Some(hint) = output.out.as_ref() else {
        let mut out = io::stdout().lock();
        out.write_all(contents.as_bytes())?;
        out.flush()?;
        return Ok(None);
    };

    let path = resolve_out_path(hint, output.format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, contents)?;
    Ok(Some(path))
}

/// A directory (existing, or hinted by a trailing separator) gets the default
/// file name with the format's extension.
pub fn resolve_out_path(hint: &Path, format: OutputFormat) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if looks_like_dir_hint(hint) || hint.is_dir() {
        ensure_directory(hint)?;
        return Ok(hint.join(format!("{}.{}", DEFAULT_OUT_STEM, format.ext())));
    }
    Ok(hint.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
