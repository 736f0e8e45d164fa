// src/catalog.rs
//
// The in-memory record list. Read-only between loads; a load replaces it
// wholesale through `replace`, which is the only mutator.

use crate::record::ContestRecord;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<ContestRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ContestRecord>) -> Self { Self { records } }

    pub fn records(&self) -> &[ContestRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, i: usize) -> Option<&ContestRecord> { self.records.get(i) }

    pub fn replace(&mut self, records: Vec<ContestRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
