// src/gui/components/results_table.rs
//
// Read-only grid of the last run's results, fixed 8 columns.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, record::Field};

// Name, tax code, address, owner, operating day, managed by, status, updated
const WIDTHS: [f32; 8] = [220.0, 100.0, 260.0, 140.0, 100.0, 160.0, 160.0, 90.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.results.is_empty() {
        ui.weak("No results yet.");
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for w in WIDTHS {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }

    table
        .header(20.0, |mut header| {
            for h in Field::headers() {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            let records = app.results.records();
            body.rows(18.0, records.len(), |mut row| {
                let record = &records[row.index()];
                for field in Field::ALL {
                    let cell = record.get(field).unwrap_or_default();
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
