use egui::{Color32, Visuals};

/// Which result panel a color is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Mean,
    Median,
    Mode,
    Range,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [StatKind::Mean, StatKind::Median, StatKind::Mode, StatKind::Range];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Mean => "Mean",
            StatKind::Median => "Median",
            StatKind::Mode => "Mode",
            StatKind::Range => "Range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    pub fn canvas_bg(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_gray(51),
            Theme::Light => Color32::from_gray(235),
        }
    }

    pub fn canvas_text(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::WHITE,
            Theme::Light => Color32::from_gray(20),
        }
    }

    pub fn marker_fill(&self) -> Color32 {
        Color32::from_rgb(255, 100, 100)
    }

    /// Result panel fills. Panel text is always black.
    pub fn stat_fill(&self, kind: StatKind) -> Color32 {
        match kind {
            StatKind::Mean => Color32::from_rgb(119, 158, 203),
            StatKind::Median => Color32::from_rgb(174, 198, 207),
            StatKind::Mode => Color32::from_rgb(255, 223, 186),
            StatKind::Range => Color32::from_rgb(255, 105, 97),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
