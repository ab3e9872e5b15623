// src/gui/components/dialog.rs

use eframe::egui::{self, Align2, RichText};
use crate::gui::app::{App, DialogKind};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = app.dialog.as_ref() else { return };

    let mut close = false;
    egui::Window::new(dialog.title())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let text = RichText::new(&dialog.text);
            match dialog.kind {
                DialogKind::Error => ui.label(text.color(ui.visuals().error_fg_color)),
                DialogKind::Info => ui.label(text),
            };
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        app.dialog = None;
    }
}
