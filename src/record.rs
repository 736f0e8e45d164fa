// src/record.rs
//
// One job-contest entry as read from the data file.
//
// Every field is optional: the source has no schema and a record with a
// missing or wrongly-typed field is kept as-is (the card shows blanks,
// `NaN` or `Invalid Date` for it). JSON keys are the source's own names.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::core::number_to_string;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ContestRecord {
    #[serde(rename = "cargo_base", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "orgao", skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(rename = "salario_min", skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    #[serde(rename = "vagas_total", skip_serializing_if = "Option::is_none")]
    pub vacancies: Option<Number>,
    #[serde(rename = "cidade_uf", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "escolaridade", skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(rename = "etapas", skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<String>>,
    #[serde(rename = "data_inscricao_inicio", skip_serializing_if = "Option::is_none")]
    pub subscription_start: Option<String>,
    #[serde(rename = "data_inscricao_fim", skip_serializing_if = "Option::is_none")]
    pub subscription_end: Option<String>,
    #[serde(rename = "link_edital", skip_serializing_if = "Option::is_none")]
    pub notice_link: Option<String>,
}

impl From<Value> for ContestRecord {
    fn from(v: Value) -> Self {
        let Value::Object(map) = v else {
            return Self::default();
        };
        let text = |k: &str| map.get(k).and_then(text_of);
        let num = |k: &str| map.get(k).and_then(Value::as_f64);

        Self {
            role: text("cargo_base"),
            organization: text("orgao"),
            min_salary: num("salario_min"),
            vacancies: map.get("vagas_total").and_then(number_of),
            city: text("cidade_uf"),
            education: text("escolaridade"),
            stages: map.get("etapas").and_then(stages_of),
            subscription_start: text("data_inscricao_inicio"),
            subscription_end: text("data_inscricao_fim"),
            notice_link: text("link_edital"),
        }
    }
}

/// Strings as-is; numbers/bools stringified like a template literal would.
fn text_of(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(number_to_string),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_of(v: &Value) -> Option<Number> {
    match v {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

fn stages_of(v: &Value) -> Option<Vec<String>> {
    let items = v.as_array()?;
    Some(items.iter().map(|i| text_of(i).unwrap_or_default()).collect())
}

/// Parse a JSON document that must be an array of record objects.
pub fn parse_records(text: &str) -> serde_json::Result<Vec<ContestRecord>> {
    serde_json::from_str(text)
}
