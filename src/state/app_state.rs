use crate::processing::statistics::StatisticsResult;
use crate::state::dataset::{AdjustDirection, Dataset};
use crate::state::settings::ViewSettings;
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

/// Everything the app shows, owned by the top-level `eframe::App`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Dataset,
    /// `None` until a calculation runs, and after reset.
    pub results: Option<StatisticsResult>,
    /// Contents of the number input field.
    pub input_text: String,
    /// Whether to show the "click the arrows" hint.
    pub show_instructions: bool,
    pub theme: Theme,
    pub view: ViewSettings,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: Dataset::new(),
            results: None,
            input_text: String::new(),
            show_instructions: false,
            theme: Theme::default(),
            view: ViewSettings::default(),
        }
    }

    /// Replace the dataset with whatever parses out of the input field.
    pub fn calculate(&mut self) {
        let dropped = self.dataset.replace_from_text(&self.input_text);
        tracing::info!(
            "Loaded {} value(s), dropped {} invalid token(s)",
            self.dataset.len(),
            dropped
        );
        self.show_instructions = true;
        self.recompute();
    }

    /// Nudge one value by one unit and refresh the statistics.
    pub fn adjust(&mut self, index: usize, direction: AdjustDirection) -> Result<(), String> {
        let new_value = self.dataset.adjust(index, direction)?;
        tracing::debug!("Adjusted value {index} to {new_value}");
        self.recompute();
        Ok(())
    }

    /// Clear the dataset, the input and the statistics.
    pub fn reset(&mut self) {
        self.dataset.clear();
        self.input_text.clear();
        self.results = None;
        self.show_instructions = false;
        tracing::info!("Reset dataset");
    }

    /// Recompute all four statistics from the current dataset.
    pub fn recompute(&mut self) {
        self.results = StatisticsResult::compute(self.dataset.values());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
