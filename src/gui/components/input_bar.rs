// src/gui/components/input_bar.rs
//
// Input/output path fields plus the Run and Copy buttons.
// Returns the action the user asked for this frame, if any.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action { Run, Copy }

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> Option<Action> {
    let mut action = None;

    egui::Grid::new("paths").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label("Excel file (.xls / .xlsx):");
        let input = ui.add(
            egui::TextEdit::singleline(&mut app.input_text)
                .hint_text("ids.xlsx (column A, first sheet)")
                .desired_width(420.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(Action::Run);
        }
        ui.end_row();

        ui.label("Save results to:");
        let out = ui.add(egui::TextEdit::singleline(&mut app.output_text).desired_width(420.0));
        if out.changed() {
            logd!("UI: Output text → {}", app.output_text);
        }
        ui.end_row();
    });

    ui.horizontal(|ui| {
        let can_run = !app.running && !app.input_text.trim().is_empty();
        if ui.add_enabled(can_run, egui::Button::new("Run")).clicked() {
            action = Some(Action::Run);
        }

        let can_copy = !app.running && !app.results.is_empty();
        if ui.add_enabled(can_copy, egui::Button::new("Copy results")).clicked() {
            action = Some(Action::Copy);
        }

        if app.running {
            ui.add(Spinner::new());
        }
    });

    if app.running { None } else { action }
}
