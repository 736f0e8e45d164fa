// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        if app.is_loading() {
            ui.spinner();
        }
        ui.label(app.status.as_str());
    });
}
