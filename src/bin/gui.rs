// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };
use mst_scan::{ config::state::GuiState, gui };

// Round green badge, drawn instead of shipped as an asset
fn app_icon() -> IconData {
    const N: u32 = 64;
    let r = N as f32 / 2.0;
    let rgba = RgbaImage::from_fn(N, N, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            Rgba([0, 0, 0, 0])
        } else if d > r - 5.0 {
            Rgba([20, 110, 60, 255])
        } else {
            Rgba([46, 170, 90, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gs.window_w as f32, gs.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
