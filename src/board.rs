// src/board.rs
//
// Board session: the owned state behind one listing surface.
//
// Holds the catalog, the current filter inputs and both selector option
// lists. Load runs once; a successful load renders everything unfiltered,
// fills the selectors and wires the city/text inputs. Each later input event
// re-runs the filter synchronously and presents the result.
//
// The education selector is always live: its change handler belongs to the
// surface itself, not to the load step.

use crate::{
    catalog::Catalog,
    choices::{self, ChoiceList},
    config::options::DataSource,
    filter::{self, EducationFilter, FilterCriteria, FilteredView},
    loader::{self, LoadError, LoadResult},
    record::ContestRecord,
    render::{present, present_load_error, ResultsView},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug)]
pub struct Board {
    catalog: Catalog,
    criteria: FilterCriteria,
    cities: ChoiceList,
    education: ChoiceList,
    /// City and text inputs only react after a successful load.
    inputs_wired: bool,
    state: LoadState,
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

impl Board {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            criteria: FilterCriteria::default(),
            cities: ChoiceList::cities(),
            education: ChoiceList::education(),
            inputs_wired: false,
            state: LoadState::Pending,
        }
    }

    /* ---------- accessors ---------- */

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }
    pub fn city_choices(&self) -> &ChoiceList { &self.cities }
    pub fn education_choices(&self) -> &ChoiceList { &self.education }
    pub fn inputs_wired(&self) -> bool { self.inputs_wired }
    pub fn load_state(&self) -> LoadState { self.state }

    /* ---------- load ---------- */

    /// Blocking read + apply. The GUI uses `loader::spawn_fetch` + `finish_load`.
    pub fn load(&mut self, source: &DataSource, view: &mut dyn ResultsView) -> Result<usize, LoadError> {
        match loader::fetch_records(source) {
            Ok(records) => Ok(self.accept(records, view)),
            Err(e) => {
                self.reject(&e, view);
                Err(e)
            }
        }
    }

    /// Apply the outcome of the one read. Returns the number of records kept.
    pub fn finish_load(&mut self, res: LoadResult, view: &mut dyn ResultsView) -> usize {
        match res {
            Ok(records) => self.accept(records, view),
            Err(e) => {
                self.reject(&e, view);
                0
            }
        }
    }

    fn accept(&mut self, records: Vec<ContestRecord>, view: &mut dyn ResultsView) -> usize {
        self.catalog.replace(records);
        self.state = LoadState::Loaded;

        present(view, self.catalog.records());

        choices::populate_city_choices(&self.catalog, &mut self.cities);
        choices::populate_education_choices(&self.catalog, &mut self.education);

        self.inputs_wired = true;
        logf!(
            "Board: loaded {} record(s), {} cities, {} education levels",
            self.catalog.len(),
            self.cities.derived().len(),
            self.education.derived().len()
        );
        self.catalog.len()
    }

    fn reject(&mut self, e: &LoadError, view: &mut dyn ResultsView) {
        loge!("Board: failed to load data: {}", e);
        self.catalog.clear();
        self.state = LoadState::Failed;
        present_load_error(view);
    }

    /* ---------- input events ---------- */

    /// Text input changed. Ignored until the load wired the input.
    pub fn on_text_input(&mut self, text: &str, view: &mut dyn ResultsView) -> bool {
        self.criteria.text = s!(text);
        if !self.inputs_wired {
            return false;
        }
        self.apply_filters(view);
        true
    }

    /// City selector changed. Ignored until the load wired the selector.
    pub fn on_city_change(&mut self, value: &str, view: &mut dyn ResultsView) -> bool {
        self.criteria.set_city(value);
        if !self.inputs_wired {
            return false;
        }
        self.apply_filters(view);
        true
    }

    /// Education selector changed. Always live.
    pub fn on_education_change(&mut self, value: &str, view: &mut dyn ResultsView) -> bool {
        self.criteria.education = EducationFilter::from_option_value(value);
        self.apply_filters(view);
        true
    }

    /* ---------- filter ---------- */

    /// Pure subset for the current inputs.
    pub fn filtered(&self) -> FilteredView<'_> {
        filter::apply(&self.catalog, &self.criteria)
    }

    /// Filter, then hand the subset to the presenter.
    pub fn apply_filters(&self, view: &mut dyn ResultsView) -> usize {
        let fv = self.filtered();
        logd!("Filter: {:?} -> {}/{}", self.criteria, fv.len(), self.catalog.len());
        present(view, fv.records());
        fv.len()
    }
}
