// src/gui/components/progress_bar.rs

use eframe::egui;
use crate::gui::app::App;

/// One unit per processed identifier.
pub fn draw(ui: &mut egui::Ui, app: &App) {
    let (done, total, status) = app.progress_snapshot();

    let frac = if total == 0 { 0.0 } else { done as f32 / total as f32 };
    ui.add(
        egui::ProgressBar::new(frac)
            .text(format!("{done}/{total}"))
            .animate(app.running),
    );
    ui.label(status);
}
