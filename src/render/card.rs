// src/render/card.rs
//
// Record -> display fragment. pt-BR formatting, no validation: missing
// values come out as blanks, `NaN` or `Invalid Date`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Number;

use crate::{
    config::consts::{CURRENCY_PREFIX, DATE_FORMAT, INVALID_DATE, RESERVE_SUFFIX, STAGE_SEP},
    core::{fixed_2, number_to_string},
    record::ContestRecord,
};

/// One rendered unit. All fields are display-ready strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub organization: String,
    /// "R$ 4500,00"
    pub salary: String,
    /// "12 + CR"
    pub vacancies: String,
    pub city: String,
    pub education: String,
    pub stages: String,
    pub subscription_start: String,
    pub subscription_end: String,
    pub link: String,
}

impl Card {
    pub fn from_record(r: &ContestRecord) -> Self {
        Self {
            title: r.role.clone().unwrap_or_default(),
            organization: r.organization.clone().unwrap_or_default(),
            salary: format_salary(r.min_salary),
            vacancies: format_vacancies(r.vacancies.as_ref()),
            city: r.city.clone().unwrap_or_default(),
            education: r.education.clone().unwrap_or_default(),
            stages: r.stages.as_deref().map(|s| s.join(STAGE_SEP)).unwrap_or_default(),
            subscription_start: format_date(r.subscription_start.as_deref()),
            subscription_end: format_date(r.subscription_end.as_deref()),
            link: r.notice_link.clone().unwrap_or_default(),
        }
    }

    /// "De 15/01/2025 até 10/02/2025"
    pub fn subscription_window(&self) -> String {
        format!("De {} até {}", self.subscription_start, self.subscription_end)
    }
}

/// Two decimals, comma as decimal separator, no grouping.
pub fn format_salary(v: Option<f64>) -> String {
    let amount = fixed_2(v.unwrap_or(f64::NAN)).replacen('.', ",", 1);
    join!(CURRENCY_PREFIX, &amount)
}

/// `12.0` and `1e2` print as integers.
pub fn format_vacancies(v: Option<&Number>) -> String {
    let n = v.and_then(Number::as_f64).map(number_to_string).unwrap_or_default();
    join!(&n, RESERVE_SUFFIX)
}

/// dd/mm/yyyy of the calendar date as written in the source.
pub fn format_date(v: Option<&str>) -> String {
    v.and_then(parse_date)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| s!(INVALID_DATE))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_uses_comma_and_two_places() {
        assert_eq!(format_salary(Some(4500.0)), "R$ 4500,00");
        assert_eq!(format_salary(Some(1234.567)), "R$ 1234,57");
        assert_eq!(format_salary(None), "R$ NaN");
    }

    #[test]
    fn salary_ties_round_up() {
        assert_eq!(format_salary(Some(0.125)), "R$ 0,13");
        assert_eq!(format_salary(Some(1234.125)), "R$ 1234,13");
        assert_eq!(format_salary(Some(1e21)), "R$ 1e+21");
    }

    #[test]
    fn float_spelled_vacancies_print_as_integers() {
        let n = |s: &str| serde_json::from_str::<Number>(s).unwrap();
        assert_eq!(format_vacancies(Some(&n("12.0"))), "12 + CR");
        assert_eq!(format_vacancies(Some(&n("1e2"))), "100 + CR");
        assert_eq!(format_vacancies(Some(&n("7"))), "7 + CR");
        assert_eq!(format_vacancies(Some(&n("2.5"))), "2.5 + CR");
        assert_eq!(format_vacancies(None), " + CR");
    }

    #[test]
    fn dates_in_several_iso_shapes() {
        assert_eq!(format_date(Some("2025-01-15")), "15/01/2025");
        assert_eq!(format_date(Some("2025-03-02T10:00:00")), "02/03/2025");
        assert_eq!(format_date(Some("2025-03-02T23:30:00-03:00")), "02/03/2025");
        assert_eq!(format_date(Some("amanhã")), "Invalid Date");
        assert_eq!(format_date(None), "Invalid Date");
    }
}
