// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use contest_board::{
    config::{options::DataSource, state::GuiState},
    gui, log,
};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/contest_board.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = img.dimensions();
    Some(IconData { rgba: img.into_raw(), width: w, height: h })
}

fn main() {
    log::init();

    // Optional single argument: data file path or http:// URL
    let source = match std::env::args().nth(1).map(|a| DataSource::parse(&a)) {
        None => DataSource::default(),
        Some(Ok(s)) => s,
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let win = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([win.window_w as f32, win.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, source) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
