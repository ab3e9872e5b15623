// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of *where the ground truth lives in the HTML*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page into a `ResultRecord`.
//! - **Selector choice** and the label → field table for the detail rows.
//! - **Per-field clean-up** (e.g. dropping the "hide info" link text from the representative).
//!
//! ## What does **not** live here
//! - **Networking**: `lookup` fetches, specs only read strings.
//! - **Batching, progress, export**: `runner` and `file` own those.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::run → LookupClient::lookup → core::net::http_get
//!                                              ↘  specs::taxinfo::extract(body)
//! ```
//!
//! ## Conventions
//! - Tolerant parsing (`scraper`/html5ever): malformed markup never fails, a miss omits the field.
//! - Label matching is exact; unknown labels are dropped silently (debug log only).
//! - Specs are testable **offline** against saved pages (see `tests/fixtures`).
pub mod taxinfo;
