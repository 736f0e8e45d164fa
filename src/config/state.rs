// src/config/state.rs
use super::options::AppOptions;
use crate::filter::FilterCriteria;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Raw control values; the board owns the parsed criteria.
    pub search_text: String,
    pub education_value: String,
    pub city_value: String,
}

impl Default for GuiState {
    fn default() -> Self {
        let criteria = FilterCriteria::default();
        Self {
            window_w: 1100,
            window_h: 760,
            search_text: criteria.text,
            education_value: criteria.education.option_value().to_string(),
            city_value: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
