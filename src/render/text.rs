// src/render/text.rs
//
// Plain-text rendering for the terminal.

use std::fmt::Write as _;

use crate::config::consts::NOTICE_LINK_LABEL;

use super::{card::Card, present::{Notice, ResultsView}};

#[derive(Debug, Default)]
pub struct TextView {
    out: String,
    count: usize,
}

impl TextView {
    pub fn new() -> Self { Self::default() }
    pub fn into_string(self) -> String { self.out }
}

impl ResultsView for TextView {
    fn clear(&mut self) {
        self.out.clear();
        self.count = 0;
    }

    fn show_notice(&mut self, notice: Notice) {
        let _ = writeln!(self.out, "{}", notice.message());
    }

    fn append_card(&mut self, c: Card) {
        if self.count > 0 {
            self.out.push('\n');
        }
        self.count += 1;

        let _ = writeln!(self.out, "{}", c.title);
        let _ = writeln!(self.out, "  {}", c.organization);
        let _ = writeln!(self.out, "  Salário: {}   Vagas: {}   Local: {}", c.salary, c.vacancies, c.city);
        let _ = writeln!(self.out, "  [{}] {}", c.education, c.stages);
        let _ = writeln!(self.out, "  Inscrições: {}", c.subscription_window());
        let _ = writeln!(self.out, "  {}: {}", NOTICE_LINK_LABEL, c.link);
    }
}
