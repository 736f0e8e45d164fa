// src/loader.rs
//
// The one static read: file path or plain http:// URL -> records.
// No retry. `spawn_fetch` runs the read on a worker thread for the GUI.

use std::{fs, io, sync::mpsc, thread};

use thiserror::Error;

use crate::{
    config::options::DataSource,
    core::net,
    record::{self, ContestRecord},
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {line}")]
    Http { status: u16, line: String },

    #[error("Malformed HTTP response: {0}")]
    MalformedResponse(String),

    #[error("Invalid data file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LoadResult = Result<Vec<ContestRecord>, LoadError>;

pub fn read_source(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => Ok(fs::read_to_string(path)?),
        DataSource::Http { host, port, path } => net::http_get(host, *port, path),
    }
}

pub fn fetch_records(source: &DataSource) -> LoadResult {
    logd!("Load: reading {}", source.describe());
    let text = read_source(source)?;
    let records = record::parse_records(&text)?;
    logf!("Load: {} record(s) from {}", records.len(), source.describe());
    Ok(records)
}

/// Fire-and-forget read on a worker thread. The receiver gets exactly one
/// message.
pub fn spawn_fetch(source: DataSource) -> mpsc::Receiver<LoadResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let res = fetch_records(&source);
        // receiver may be gone if the window closed first
        let _ = tx.send(res);
    });
    rx
}
