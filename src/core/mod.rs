// src/core/mod.rs

pub mod net;
pub mod normalize;
pub mod number;

pub use normalize::{normalize, normalize_opt};
pub use number::{fixed_2, number_to_string};
