// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread::JoinHandle,
};

use eframe::egui;

use crate::{ config::{ consts::LOG_FILE, state::AppState }, record::ResultBatch };

use super::{ actions, components, progress::RunShared };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init(LOG_FILE);
    eframe::run_native(
        "Scan Mã Số Thuế",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind { Info, Error }

/// A blocking message box: nothing else is clickable until it's dismissed.
#[derive(Clone, Debug)]
pub struct Dialog {
    pub kind: DialogKind,
    pub text: String,
}

impl Dialog {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: DialogKind::Info, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: DialogKind::Error, text: text.into() }
    }
    pub fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::Info => "Information",
            DialogKind::Error => "Error",
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // text fields (mapped into RunOptions when Run is clicked)
    pub input_text: String,
    pub output_text: String,

    // results of the last finished run
    pub results: ResultBatch,

    // worker → UI
    pub shared: Arc<Mutex<RunShared>>,
    pub worker: Option<JoinHandle<()>>,
    pub running: bool,

    pub dialog: Option<Dialog>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let input_text = state.gui.last_input.clone();
        let output_text = state.options.output.to_string_lossy().into_owned();

        logf!("Init: output={}", output_text);

        Self {
            state,
            input_text,
            output_text,
            results: ResultBatch::default(),
            shared: Arc::new(Mutex::new(RunShared { status: s!("Idle"), ..RunShared::default() })),
            worker: None,
            running: false,
            dialog: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.shared.lock() {
            s.status = msg.into();
        }
    }

    /// (done, total, status) snapshot for drawing.
    pub fn progress_snapshot(&self) -> (usize, usize, String) {
        match self.shared.lock() {
            Ok(s) => (s.done, s.total, s.status.clone()),
            Err(_) => (0, 0, s!()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            ui.add_enabled_ui(self.dialog.is_none(), |ui| {
                match components::input_bar::draw(ui, self) {
                    Some(components::input_bar::Action::Run) => actions::run(self, ctx),
                    Some(components::input_bar::Action::Copy) => actions::copy(self, ctx),
                    None => {}
                }
            });
            components::progress_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::results_table::draw(ui, self);
        });

        components::dialog::draw(ctx, self);
    }
}
