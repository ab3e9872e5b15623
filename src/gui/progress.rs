// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::{ error::{ Error, Outcome }, progress::Progress, runner::RunSummary };

/// Written by the worker thread, read by the UI every frame.
#[derive(Default)]
pub struct RunShared {
    pub done: usize,
    pub total: usize,
    pub status: String,
    pub result: Option<Result<RunSummary, Error>>,
}

pub struct GuiProgress {
    shared: Arc<Mutex<RunShared>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(shared: Arc<Mutex<RunShared>>, ctx: egui::Context) -> Self {
        Self { shared, ctx }
    }

    fn update(&self, f: impl FnOnce(&mut RunShared)) {
        if let Ok(mut shared) = self.shared.lock() {
            f(&mut shared);
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.update(|s| {
            s.total = total;
            s.done = 0;
        });
    }
    fn log(&mut self, msg: &str) {
        self.update(|s| s.status = s!(msg));
    }
    fn item_done(&mut self, done: usize, id: &str, outcome: &Outcome) {
        let tag = match outcome {
            Outcome::Ok => "",
            Outcome::Blocked => " (blocked)",
            Outcome::Failed(_) => " (no data)",
        };
        self.update(|s| {
            s.done = done;
            s.status = format!("Looked up {id}{tag} ({}/{})", done, s.total);
        });
    }
    fn finish(&mut self) {
        self.update(|s| s.status = format!("Lookups complete ({}/{}), writing results…", s.done, s.total));
    }
}
