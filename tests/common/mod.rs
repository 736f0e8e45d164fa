// tests/common/mod.rs
//
// Shared fixtures and a recording ResultsView stub.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use contest_board::record::ContestRecord;
use contest_board::render::{Card, Notice, ResultsView};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("contest_board_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn rec(role: &str, org: &str, edu: &str, city: &str) -> ContestRecord {
    ContestRecord {
        role: Some(role.into()),
        organization: Some(org.into()),
        education: Some(edu.into()),
        city: Some(city.into()),
        ..ContestRecord::default()
    }
}

/// Every call the presenter makes, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    Notice(Notice),
    Card(Card),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<Call>,
}

impl RecordingView {
    /// State after the last clear.
    pub fn visible(&self) -> &[Call] {
        let start = self.calls.iter().rposition(|c| *c == Call::Clear).map(|i| i + 1).unwrap_or(0);
        &self.calls[start..]
    }

    pub fn visible_titles(&self) -> Vec<String> {
        self.visible()
            .iter()
            .filter_map(|c| match c {
                Call::Card(card) => Some(card.title.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn visible_notices(&self) -> Vec<Notice> {
        self.visible()
            .iter()
            .filter_map(|c| match c {
                Call::Notice(n) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

impl ResultsView for RecordingView {
    fn clear(&mut self) { self.calls.push(Call::Clear); }
    fn show_notice(&mut self, notice: Notice) { self.calls.push(Call::Notice(notice)); }
    fn append_card(&mut self, card: Card) { self.calls.push(Call::Card(card)); }
}
