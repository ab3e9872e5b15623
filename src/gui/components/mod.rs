// src/gui/components/mod.rs
pub mod dialog;
pub mod input_bar;
pub mod progress_bar;
pub mod results_table;
