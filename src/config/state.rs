// src/config/state.rs
use super::options::RunOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Last input path typed or run, restored into the text field
    pub last_input: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            last_input: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: RunOptions,
    pub gui: GuiState,
}
