// src/render/present.rs
//
// Result presenter and the display port it writes to.
//
// Frontends (GUI card area, terminal, static HTML) implement `ResultsView`.
// `present` always clears first, so presenting the same list twice leaves the
// same visible state.

use crate::{
    config::consts::{MSG_LOAD_FAILED, MSG_NO_RESULTS},
    record::ContestRecord,
};

use super::card::Card;

/// Fixed messages shown in place of results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    NoResults,
    LoadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoResults => MSG_NO_RESULTS,
            Notice::LoadFailed => MSG_LOAD_FAILED,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::NoResults => "alerta-mensagem",
            Notice::LoadFailed => "erro-mensagem",
        }
    }
}

/// Rendering port: "given a record list, display N visual units".
pub trait ResultsView {
    /// Drop everything currently shown.
    fn clear(&mut self);

    /// Show a single message instead of cards.
    fn show_notice(&mut self, notice: Notice);

    /// Append one card after the ones already shown.
    fn append_card(&mut self, card: Card);
}

pub fn present<'a, I>(view: &mut dyn ResultsView, records: I)
where
    I: IntoIterator<Item = &'a ContestRecord>,
{
    view.clear();

    let mut shown = 0usize;
    for r in records {
        view.append_card(Card::from_record(r));
        shown += 1;
    }
    if shown == 0 {
        view.show_notice(Notice::NoResults);
    }
    logd!("Present: {} card(s)", shown);
}

/// Replace the results with the load-failure message.
pub fn present_load_error(view: &mut dyn ResultsView) {
    view.clear();
    view.show_notice(Notice::LoadFailed);
}

/// What a `CardList` currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Shown {
    #[default]
    Nothing,
    Notice(Notice),
    Cards(Vec<Card>),
}

/// In-memory view: keeps the shown state for a frontend to draw later.
#[derive(Clone, Debug, Default)]
pub struct CardList {
    shown: Shown,
}

impl CardList {
    pub fn new() -> Self { Self::default() }
    pub fn shown(&self) -> &Shown { &self.shown }

    pub fn cards(&self) -> &[Card] {
        match &self.shown {
            Shown::Cards(c) => c.as_slice(),
            _ => &[],
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.shown {
            Shown::Notice(n) => Some(n),
            _ => None,
        }
    }
}

impl ResultsView for CardList {
    fn clear(&mut self) {
        self.shown = Shown::Nothing;
    }

    fn show_notice(&mut self, notice: Notice) {
        self.shown = Shown::Notice(notice);
    }

    fn append_card(&mut self, card: Card) {
        match &mut self.shown {
            Shown::Cards(c) => c.push(card),
            _ => self.shown = Shown::Cards(vec![card]),
        }
    }
}

/// Discards everything. For callers that only want the side effects.
pub struct NullView;
impl ResultsView for NullView {
    fn clear(&mut self) {}
    fn show_notice(&mut self, _notice: Notice) {}
    fn append_card(&mut self, _card: Card) {}
}
