// src/filter.rs
//
// Filter engine: text + education + city, AND-combined.
//
// `apply` is pure. It returns a `FilteredView` holding row indices into the
// catalog, in catalog order, so the result is always an order-preserving
// subset. Presenting the view is someone else's job (see `render::present`).

use crate::{
    catalog::Catalog,
    config::consts::EDUCATION_ALL,
    core::{normalize, normalize_opt},
    record::ContestRecord,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EducationFilter {
    All,
    Exact(String),
}

impl EducationFilter {
    /// Map a selector value to a filter. The "todos" sentinel means All.
    pub fn from_option_value(v: &str) -> Self {
        if v == EDUCATION_ALL { EducationFilter::All } else { EducationFilter::Exact(s!(v)) }
    }

    pub fn option_value(&self) -> &str {
        match self {
            EducationFilter::All => EDUCATION_ALL,
            EducationFilter::Exact(v) => v.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Raw query as typed; normalized at match time.
    pub text: String,
    pub education: EducationFilter,
    /// None or "" = any city
    pub city: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self { text: s!(), education: EducationFilter::All, city: None }
    }
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        normalize(&self.text).is_empty()
            && self.education == EducationFilter::All
            && self.city.as_deref().is_none_or(str::is_empty)
    }

    pub fn set_city(&mut self, v: &str) {
        self.city = if v.is_empty() { None } else { Some(s!(v)) };
    }

    /// Precompute the normalized query once per pass.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher { query: normalize(&self.text), criteria: self }
    }
}

/// Criteria with the query already folded.
pub struct Matcher<'a> {
    query: String,
    criteria: &'a FilterCriteria,
}

impl Matcher<'_> {
    pub fn text_matches(&self, r: &ContestRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        normalize_opt(r.role.as_deref()).contains(&self.query)
            || normalize_opt(r.organization.as_deref()).contains(&self.query)
    }

    pub fn education_matches(&self, r: &ContestRecord) -> bool {
        match &self.criteria.education {
            EducationFilter::All => true,
            EducationFilter::Exact(want) => r.education.as_deref() == Some(want.as_str()),
        }
    }

    pub fn city_matches(&self, r: &ContestRecord) -> bool {
        match self.criteria.city.as_deref() {
            None | Some("") => true,
            Some(want) => r.city.as_deref() == Some(want),
        }
    }

    pub fn matches(&self, r: &ContestRecord) -> bool {
        self.text_matches(r) && self.education_matches(r) && self.city_matches(r)
    }
}

/// Zero-copy filtered view: positions of kept records in the catalog.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> FilteredView<'a> {
    pub fn all(catalog: &'a Catalog) -> Self {
        Self { row_ix: (0..catalog.len()).collect(), catalog }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn records(&self) -> impl Iterator<Item = &'a ContestRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.catalog.get(ix))
    }
}

pub fn apply<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> FilteredView<'a> {
    if criteria.is_unfiltered() {
        return FilteredView::all(catalog);
    }
    let m = criteria.matcher();
    let row_ix = catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| m.matches(r))
        .map(|(i, _)| i)
        .collect();
    FilteredView { row_ix, catalog }
}
