// src/gui/components/card_list.rs
//
// Draws whatever the presenter left in `app.results`. Purely a view.

use eframe::egui::{self, Color32, RichText};

use crate::{
    config::consts::NOTICE_LINK_LABEL,
    gui::app::App,
    render::{Card, Notice, Shown},
};

// pt-BR page palette
const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
const ALERT_YELLOW: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);
const TAG_BLUE: Color32 = Color32::from_rgb(0x64, 0xB4, 0xFF);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    egui::ScrollArea::vertical()
        .id_salt("containerResultados")
        .auto_shrink([false, false])
        .show(ui, |ui| match app.results.shown() {
            Shown::Nothing => {
                if app.is_loading() {
                    ui.centered_and_justified(|ui| { ui.spinner(); });
                }
            }
            Shown::Notice(n) => notice(ui, *n),
            Shown::Cards(cards) => {
                for (i, c) in cards.iter().enumerate() {
                    card(ui, i, c);
                    ui.add_space(8.0);
                }
            }
        });
}

fn notice(ui: &mut egui::Ui, n: Notice) {
    let color = match n {
        Notice::LoadFailed => ERROR_RED,
        Notice::NoResults => ALERT_YELLOW,
    };
    ui.add_space(12.0);
    ui.label(RichText::new(n.message()).color(color).size(15.0));
}

fn card(ui: &mut egui::Ui, idx: usize, c: &Card) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(&c.title).heading().strong());
        ui.label(RichText::new(&c.organization).italics());
        ui.add_space(4.0);

        egui::Grid::new(("card_metrics", idx))
            .num_columns(2)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                ui.label("Salário:");
                ui.label(RichText::new(&c.salary).strong());
                ui.end_row();

                ui.label("Vagas:");
                ui.label(RichText::new(&c.vacancies).strong());
                ui.end_row();

                ui.label("Local:");
                ui.label(RichText::new(&c.city).strong());
                ui.end_row();

                ui.label("Inscrições:");
                ui.label(c.subscription_window());
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&c.education).color(TAG_BLUE).strong());
            if !c.stages.is_empty() {
                ui.label("·");
                ui.label(c.stages.as_str());
            }
        });

        ui.hyperlink_to(NOTICE_LINK_LABEL, &c.link);
    });
}
