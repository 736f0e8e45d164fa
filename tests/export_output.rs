// tests/export_output.rs
//
// CLI output path: filtered view -> text/html/json -> file.
mod common;

use std::fs;

use common::{fixture, tmp_dir};
use contest_board::board::Board;
use contest_board::config::options::{DataSource, OutputFormat, OutputOptions};
use contest_board::file::{self, to_export_string};
use contest_board::record::ContestRecord;
use contest_board::render::NullView;

fn board() -> Board {
    let mut b = Board::new();
    b.load(&DataSource::File(fixture("three_cities.json")), &mut NullView).unwrap();
    b
}

#[test]
fn html_uses_card_markup_and_escapes() {
    let b = board();
    let html = to_export_string(OutputFormat::Html, &b.filtered()).unwrap();
    assert_eq!(html.matches(r#"<article class="card-concurso">"#).count(), 3);
    assert!(html.contains("<span>R$ 4500,00</span>"));
    assert!(html.contains("<span>12 + CR</span>"));
    assert!(html.contains(r#"class="botao-edital">Ver Edital</a>"#));
}

#[test]
fn html_empty_result_is_the_alert_paragraph() {
    let mut b = board();
    b.on_text_input("nada disso", &mut NullView);
    let html = to_export_string(OutputFormat::Html, &b.filtered()).unwrap();
    assert!(html.starts_with(r#"<p class="alerta-mensagem">Nenhum concurso encontrado"#));
    assert!(!html.contains("<article"));
}

#[test]
fn json_round_trips_the_filtered_subset() {
    let mut b = board();
    b.on_city_change("São Paulo-SP", &mut NullView);
    let json = to_export_string(OutputFormat::Json, &b.filtered()).unwrap();

    let back: Vec<ContestRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].organization.as_deref(), Some("Prefeitura de São Paulo"));
    assert!(json.contains(r#""vagas_total": 40"#));
}

#[test]
fn text_lists_each_card() {
    let b = board();
    let txt = to_export_string(OutputFormat::Text, &b.filtered()).unwrap();
    assert!(txt.starts_with("Analista Judiciário\n"));
    assert!(txt.contains("Salário: R$ 8750,50"));
    assert!(txt.contains("Inscrições: De 01/03/2025 até 31/03/2025"));
}

#[test]
fn directory_hint_gets_default_file_name() {
    let dir = tmp_dir("out_dir_hint");
    let mut hint = dir.to_string_lossy().into_owned();
    hint.push('/');

    let opts = OutputOptions { format: OutputFormat::Html, out: Some(hint.into()) };
    let written = file::write_output(&opts, "<p>x</p>").unwrap().unwrap();
    assert_eq!(written, dir.join("resultados.html"));
    assert_eq!(fs::read_to_string(written).unwrap(), "<p>x</p>");
}

#[test]
fn explicit_file_path_creates_parents() {
    let dir = tmp_dir("out_file");
    let target = dir.join("nested/deeper/lista.json");
    let opts = OutputOptions { format: OutputFormat::Json, out: Some(target.clone()) };
    let written = file::write_output(&opts, "[]\n").unwrap();
    assert_eq!(written, Some(target.clone()));
    assert!(target.exists());
}
