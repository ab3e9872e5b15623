// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

/// Results grid → clipboard as TSV (pastes straight into a spreadsheet).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.results.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::to_tsv(&app.results);
    logf!("Copy: rows={}", app.results.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
