// src/choices.rs
//
// Selector option lists for the city and education filters.
//
// Each list keeps a fixed first "all" placeholder. Repopulating drops every
// other option and appends one per derived value (value == label == raw text).
// Values are derived from the full catalog, once per load.

use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    config::consts::{CITY_ALL, CITY_ALL_LABEL, EDUCATION_ALL, EDUCATION_ALL_LABEL},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self { value: s!(value), label: s!(label) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceList {
    options: Vec<SelectOption>,
}

impl ChoiceList {
    pub fn with_placeholder(value: &str, label: &str) -> Self {
        Self { options: vec![SelectOption::new(value, label)] }
    }

    pub fn cities() -> Self { Self::with_placeholder(CITY_ALL, CITY_ALL_LABEL) }
    pub fn education() -> Self { Self::with_placeholder(EDUCATION_ALL, EDUCATION_ALL_LABEL) }

    pub fn placeholder(&self) -> &SelectOption { &self.options[0] }

    /// Everything, placeholder first.
    pub fn options(&self) -> &[SelectOption] { &self.options }

    /// Options after the placeholder.
    pub fn derived(&self) -> &[SelectOption] { &self.options[1..] }

    pub fn contains_value(&self, v: &str) -> bool {
        self.options.iter().any(|o| o.value == v)
    }

    pub fn label_for(&self, v: &str) -> Option<&str> {
        self.options.iter().find(|o| o.value == v).map(|o| o.label.as_str())
    }

    pub fn repopulate<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.options.truncate(1);
        self.options.extend(values.into_iter().map(|v| SelectOption { label: v.clone(), value: v }));
    }
}

/// Unique city labels, sorted. Records without a city are skipped.
pub fn city_values(catalog: &Catalog) -> Vec<String> {
    let set: BTreeSet<&str> = catalog.records().iter().filter_map(|r| r.city.as_deref()).collect();
    set.into_iter().map(String::from).collect()
}

/// Unique trimmed education labels, sorted; blank ones dropped.
pub fn education_values(catalog: &Catalog) -> Vec<String> {
    let set: BTreeSet<&str> = catalog
        .records()
        .iter()
        .filter_map(|r| r.education.as_deref())
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect();
    set.into_iter().map(String::from).collect()
}

pub fn populate_city_choices(catalog: &Catalog, list: &mut ChoiceList) {
    let values = city_values(catalog);
    logd!("Choices: {} cities", values.len());
    list.repopulate(values);
}

pub fn populate_education_choices(catalog: &Catalog, list: &mut ChoiceList) {
    let values = education_values(catalog);
    logd!("Choices: {} education levels", values.len());
    list.repopulate(values);
}
