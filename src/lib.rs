// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod board;
pub mod catalog;
pub mod choices;
pub mod file;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod record;
pub mod render;
