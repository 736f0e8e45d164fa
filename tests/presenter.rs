// tests/presenter.rs
//
// Result presenter through a recording stub port.
mod common;

use common::{rec, Call, RecordingView};
use contest_board::record::ContestRecord;
use contest_board::render::{present, present_load_error, CardList, Notice, Shown};

#[test]
fn empty_list_shows_exactly_one_message() {
    let none: Vec<ContestRecord> = Vec::new();
    let mut view = RecordingView::default();
    present(&mut view, &none);

    assert_eq!(view.calls.first(), Some(&Call::Clear));
    assert_eq!(view.visible_notices(), vec![Notice::NoResults]);
    assert!(view.visible_titles().is_empty());
    assert_eq!(view.visible().len(), 1);
}

#[test]
fn n_records_give_n_cards_in_order() {
    let records = vec![
        rec("Primeiro", "A", "Superior", "X"),
        rec("Segundo", "B", "Médio", "Y"),
        rec("Terceiro", "C", "Superior", "Z"),
    ];
    let mut view = RecordingView::default();
    present(&mut view, &records);

    assert_eq!(view.visible_titles(), vec!["Primeiro", "Segundo", "Terceiro"]);
    assert!(view.visible_notices().is_empty());
}

#[test]
fn presenting_twice_is_idempotent() {
    let records = vec![rec("Um", "A", "S", "X"), rec("Dois", "B", "S", "Y")];
    let mut list = CardList::new();
    present(&mut list, &records);
    let first = list.shown().clone();
    present(&mut list, &records);
    assert_eq!(list.shown(), &first);
    assert_eq!(list.cards().len(), 2);

    let none: Vec<ContestRecord> = Vec::new();
    present(&mut list, &none);
    present(&mut list, &none);
    assert_eq!(list.shown(), &Shown::Notice(Notice::NoResults));
}

#[test]
fn load_error_replaces_cards() {
    let records = vec![rec("Um", "A", "S", "X")];
    let mut list = CardList::new();
    present(&mut list, &records);
    present_load_error(&mut list);
    assert_eq!(list.notice(), Some(Notice::LoadFailed));
    assert!(list.cards().is_empty());
}
