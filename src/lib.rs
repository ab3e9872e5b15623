// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod gui;
pub mod lookup;
pub mod progress;
pub mod record;
pub mod runner;

pub use error::{Error, FormatError, LookupFailure, Outcome};
pub use lookup::LookupClient;
pub use record::{Field, ResultBatch, ResultRecord};
