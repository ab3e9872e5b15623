// src/gui/actions/poll.rs
use crate::{
    config::consts::LOG_FILE,
    gui::app::{ App, Dialog },
};

/// Pick up a finished run, if any. Called every frame.
pub fn poll(app: &mut App) {
    if !app.running {
        return;
    }

    // A poisoned lock still holds whatever the worker managed to store
    let finished = match app.shared.lock() {
        Ok(mut s) => s.result.take(),
        Err(poisoned) => poisoned.into_inner().result.take(),
    };

    let Some(result) = finished else {
        // Worker gone without a result: it panicked
        if app.worker.as_ref().is_some_and(|w| w.is_finished()) {
            app.worker = None;
            app.running = false;
            loge!("Run: worker stopped without a result");
            app.dialog = Some(Dialog::error(format!(
                "The lookup stopped unexpectedly. See {LOG_FILE} for details."
            )));
        }
        return;
    };

    app.running = false;
    app.worker = None;
    match result {
        Ok(summary) => {
            logf!("Run: OK rows={} output={}", summary.report.batch.len(), summary.output.display());
            let msg = summary.message();
            app.results = summary.report.batch;
            app.dialog = Some(Dialog::info(msg));
        }
        Err(e) => {
            loge!("Run: Error: {e}");
            app.dialog = Some(Dialog::error(e.to_string()));
        }
    }
}
