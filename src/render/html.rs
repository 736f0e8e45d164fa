// src/render/html.rs
//
// Static HTML rendering of the results area. Same markup and class names as
// the board's web page, so an exported snapshot styles the same way.

use std::fmt::Write as _;

use crate::config::consts::NOTICE_LINK_LABEL;

use super::{card::Card, present::{Notice, ResultsView}};

#[derive(Debug, Default)]
pub struct HtmlView {
    out: String,
}

impl HtmlView {
    pub fn new() -> Self { Self::default() }
    pub fn into_string(self) -> String { self.out }
}

impl ResultsView for HtmlView {
    fn clear(&mut self) {
        self.out.clear();
    }

    fn show_notice(&mut self, notice: Notice) {
        let _ = writeln!(
            self.out,
            r#"<p class="{}">{}</p>"#,
            notice.css_class(),
            escape(notice.message())
        );
    }

    fn append_card(&mut self, card: Card) {
        self.out.push_str(&card_html(&card));
    }
}

pub fn card_html(c: &Card) -> String {
    format!(
        r#"<article class="card-concurso">
    <div class="card-header">
        <h3>{title}</h3>
    </div>
    <div class="card-orgao-info">
        <p class="orgao-tag">{org}</p>
    </div>
    <div class="card-metrica">
        <p>Salário: <span>{salary}</span></p>
        <p>Vagas: <span>{vacancies}</span></p>
        <p>Local: <span>{city}</span></p>
    </div>
    <div class="card-tags-detalhes">
        <span class="tag-escolaridade">{education}</span>
        <span class="tag-etapas">{stages}</span>
    </div>
    <div class="card-inscricao-detalhe">
        <p>Inscrições: <span>{window}</span></p>
    </div>
    <a href="{link}" target="_blank" class="botao-edital">{link_label}</a>
</article>
"#,
        title = escape(&c.title),
        org = escape(&c.organization),
        salary = escape(&c.salary),
        vacancies = escape(&c.vacancies),
        city = escape(&c.city),
        education = escape(&c.education),
        stages = escape(&c.stages),
        window = escape(&c.subscription_window()),
        link = escape(&c.link),
        link_label = NOTICE_LINK_LABEL,
    )
}

/// Minimal HTML text/attribute escaping.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
