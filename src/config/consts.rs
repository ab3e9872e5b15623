// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://masothue.com";
pub const SEARCH_PATH: &str = "/Search/";
pub const SEARCH_TYPE: &str = "auto";
// The site rejects default client identifiers
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

// Extract
pub const HIDDEN_INFO_MARKER: &str = " Ẩn thông tin";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";

// Import / export
pub const INPUT_EXTENSIONS: &[&str] = &["xls", "xlsx"];
pub const DEFAULT_OUTPUT_FILE: &str = "output.xlsx";
pub const RESULTS_SHEET: &str = "Results";
