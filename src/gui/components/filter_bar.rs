// src/gui/components/filter_bar.rs
//
// Search box + education + city selectors. Each change is forwarded to the
// board as an input event; the board decides whether it filters yet.

use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::{choices::ChoiceList, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Concursos Abertos");
    ui.add_space(4.0);

    let mut text_changed = false;
    let mut education_changed = false;
    let mut city_changed = false;

    StripBuilder::new(ui)
        .size(Size::remainder().at_least(220.0))
        .size(Size::exact(200.0))
        .size(Size::exact(220.0))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.search_text)
                        .id_salt("buscaTexto")
                        .hint_text("Buscar por cargo ou órgão")
                        .desired_width(f32::INFINITY),
                );
                text_changed = resp.changed();
            });
            strip.cell(|ui| {
                education_changed = combo(
                    ui,
                    "filtro-escolaridade",
                    app.board.education_choices(),
                    &mut app.state.gui.education_value,
                );
            });
            strip.cell(|ui| {
                city_changed = combo(
                    ui,
                    "filtroCidade",
                    app.board.city_choices(),
                    &mut app.state.gui.city_value,
                );
            });
        });

    let gui = &app.state.gui;
    let mut refiltered = false;
    if text_changed {
        refiltered |= app.board.on_text_input(&gui.search_text, &mut app.results);
    }
    if education_changed {
        logf!("UI: education → {:?}", gui.education_value);
        refiltered |= app.board.on_education_change(&gui.education_value, &mut app.results);
    }
    if city_changed {
        logf!("UI: city → {:?}", gui.city_value);
        refiltered |= app.board.on_city_change(&gui.city_value, &mut app.results);
    }

    if refiltered {
        let shown = app.results.cards().len();
        app.set_result_status(shown);
    }
}

/// Selector over a choice list. Returns true when the value changed.
fn combo(ui: &mut egui::Ui, id: &str, list: &ChoiceList, value: &mut String) -> bool {
    let before = value.clone();
    let selected = list.label_for(value).unwrap_or(value.as_str()).to_owned();

    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for opt in list.options() {
                ui.selectable_value(value, opt.value.clone(), opt.label.as_str());
            }
        });

    *value != before
}
