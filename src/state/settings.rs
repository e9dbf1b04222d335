use serde::{Deserialize, Serialize};

/// Tunable drawing parameters for the dataset canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Marker diameter for the smallest value (pixels).
    pub min_marker_diameter: f32,
    /// Marker diameter for the largest value (pixels).
    pub max_marker_diameter: f32,
    /// Gap between the canvas edge and the first/last marker.
    pub horizontal_margin: f32,
    pub show_value_labels: bool,
    pub text_size: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            min_marker_diameter: 10.0,
            max_marker_diameter: 30.0,
            horizontal_margin: 50.0,
            show_value_labels: true,
            text_size: 15.0,
        }
    }
}

impl ViewSettings {
    /// Keep the diameter range ordered after the user edits one end.
    pub fn normalize(&mut self) {
        if self.min_marker_diameter > self.max_marker_diameter {
            std::mem::swap(&mut self.min_marker_diameter, &mut self.max_marker_diameter);
        }
        self.horizontal_margin = self.horizontal_margin.max(0.0);
    }
}
