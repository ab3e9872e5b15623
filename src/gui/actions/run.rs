// src/gui/actions/run.rs
use std::{ path::PathBuf, sync::{ Arc, Mutex, PoisonError }, thread };

use eframe::egui;

use crate::{
    gui::{ app::{ App, Dialog }, progress::{ GuiProgress, RunShared } },
    runner,
};

/// Validate the input file on the UI thread, then hand the lookups to a worker.
pub fn run(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    app.state.options.input = PathBuf::from(app.input_text.trim());
    app.state.options.set_output(&app.output_text);
    app.state.gui.last_input = app.input_text.clone();

    let opts = app.state.options.clone();
    logf!("Run: Begin input={} output={}", opts.input.display(), opts.output.display());

    // Wrong extension / unreadable / empty: dialog, no requests
    let ids = match runner::load_identifiers(&opts.input) {
        Ok(ids) => ids,
        Err(e) => {
            loge!("Run: {e}");
            app.dialog = Some(Dialog::error(e.to_string()));
            return;
        }
    };

    app.results = Default::default();
    app.running = true;
    app.shared = Arc::new(Mutex::new(RunShared {
        total: ids.len(),
        status: format!("Found {} identifier(s)", ids.len()),
        ..RunShared::default()
    }));

    let shared = Arc::clone(&app.shared);
    let ctx = ctx.clone();

    app.worker = Some(thread::spawn(move || {
        let mut prog = GuiProgress::new(Arc::clone(&shared), ctx.clone());
        let result = runner::run_ids(&opts, &ids, Some(&mut prog));

        let mut s = shared.lock().unwrap_or_else(PoisonError::into_inner);
        s.result = Some(result);
        drop(s);
        ctx.request_repaint();
    }));
}
