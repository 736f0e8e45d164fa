// src/render/mod.rs
pub mod card;
pub mod html;
pub mod present;
pub mod text;

pub use card::Card;
pub use html::HtmlView;
pub use present::{present, present_load_error, CardList, Notice, NullView, ResultsView, Shown};
pub use text::TextView;
