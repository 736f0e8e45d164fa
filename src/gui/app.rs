// src/gui/app.rs
use std::{
    error::Error,
    io,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use eframe::egui;

use crate::{
    board::{Board, LoadState},
    config::{options::DataSource, state::AppState},
    loader::{self, LoadResult},
    render::CardList,
};

pub fn run(options: eframe::NativeOptions, source: DataSource) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.source = source;

    eframe::run_native(
        "Concursos Abertos",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub board: Board,

    // what the results area shows right now
    pub results: CardList,
    pub status: String,

    // the one in-flight read, until it reports back
    pending: Option<Receiver<LoadResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let source = state.options.source.clone();
        logf!("Init: loading {}", source.describe());

        let status = format!("Carregando {}…", source.describe());
        let pending = Some(loader::spawn_fetch(source));

        Self {
            state,
            board: Board::new(),
            results: CardList::new(),
            status,
            pending,
        }
    }

    pub fn is_loading(&self) -> bool { self.pending.is_some() }

    /// Drain the loader channel. Returns true once the load has been applied.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = self.pending.as_ref() else { return false };

        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                Err(io::Error::other("loader thread exited without a result").into())
            }
        };
        self.pending = None;

        let n = self.board.finish_load(res, &mut self.results);
        self.status = match self.board.load_state() {
            LoadState::Loaded => format!("{} concurso(s) carregado(s)", n),
            _ => s!("Falha ao carregar os dados"),
        };
        true
    }

    pub fn set_result_status(&mut self, shown: usize) {
        self.status = format!("{} de {} concurso(s)", shown, self.board.catalog().len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_loading() && !self.poll_load() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            ui.add_space(6.0);
            crate::gui::components::filter_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::card_list::draw(ui, self);
        });
    }
}
