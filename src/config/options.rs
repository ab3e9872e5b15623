// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Where lookups go and how they identify themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl LookupOptions {
    /// `base_url` without a trailing slash, joined with the search path.
    pub fn search_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), SEARCH_PATH)
    }
}

/// One batch: input table, output table, lookup settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lookup: LookupOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            lookup: LookupOptions::default(),
        }
    }
}

impl RunOptions {
    /// Parse GUI text into the output path. Empty text falls back to the default file.
    pub fn set_output(&mut self, text: &str) {
        let s = text.trim();
        self.output = if s.is_empty() {
            PathBuf::from(DEFAULT_OUTPUT_FILE)
        } else {
            PathBuf::from(s)
        };
    }
}
