// tests/card_render.rs
mod common;

use common::fixture;
use contest_board::config::options::DataSource;
use contest_board::loader;
use contest_board::render::Card;

#[test]
fn cards_from_fixture_are_formatted_pt_br() {
    let recs = loader::fetch_records(&DataSource::File(fixture("three_cities.json"))).unwrap();
    let c = Card::from_record(&recs[0]);

    assert_eq!(c.title, "Analista Judiciário");
    assert_eq!(c.organization, "TRT 6ª Região");
    assert_eq!(c.salary, "R$ 13994,78");
    assert_eq!(c.vacancies, "12 + CR");
    assert_eq!(c.city, "Recife-PE");
    assert_eq!(c.education, "Superior");
    assert_eq!(c.stages, "Prova objetiva, Prova discursiva");
    assert_eq!(c.subscription_window(), "De 15/01/2025 até 10/02/2025");
    assert_eq!(c.link, "https://example.org/trt6/edital.pdf");

    let c = Card::from_record(&recs[1]);
    assert_eq!(c.salary, "R$ 4500,00");
    assert_eq!(c.vacancies, "40 + CR");

    let c = Card::from_record(&recs[2]);
    assert_eq!(c.subscription_start, "07/04/2025");
    assert_eq!(c.stages, "Prova objetiva, TAF, Investigação social");
}

#[test]
fn malformed_fields_render_as_garbage_not_errors() {
    let recs = loader::fetch_records(&DataSource::File(fixture("malformed_fields.json"))).unwrap();
    assert_eq!(recs.len(), 2);

    let c = Card::from_record(&recs[0]);
    assert_eq!(c.salary, "R$ NaN");
    assert_eq!(c.vacancies, " + CR");
    assert_eq!(c.stages, "");
    assert_eq!(c.subscription_window(), "De Invalid Date até Invalid Date");
    assert_eq!(c.link, "");

    let c = Card::from_record(&recs[1]);
    assert_eq!(c.salary, "R$ NaN");
    assert_eq!(c.vacancies, "3 + CR");
    assert_eq!(c.city, "");
    assert_eq!(c.subscription_start, "Invalid Date");
    assert_eq!(c.subscription_end, "Invalid Date");
}

#[test]
fn numbers_print_like_the_board_page() {
    let recs = contest_board::record::parse_records(
        r#"[{"cargo_base":"A","salario_min":0.125,"vagas_total":12.0},
            {"cargo_base":"B","salario_min":1e21,"vagas_total":1e2},
            {"cargo_base":10.0,"orgao":"C","salario_min":1234.125,"vagas_total":3}]"#,
    )
    .unwrap();

    let c = Card::from_record(&recs[0]);
    assert_eq!(c.salary, "R$ 0,13");
    assert_eq!(c.vacancies, "12 + CR");

    let c = Card::from_record(&recs[1]);
    assert_eq!(c.salary, "R$ 1e+21");
    assert_eq!(c.vacancies, "100 + CR");

    let c = Card::from_record(&recs[2]);
    assert_eq!(c.title, "10");
    assert_eq!(c.salary, "R$ 1234,13");
    assert_eq!(c.vacancies, "3 + CR");
}
