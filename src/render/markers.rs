use egui::{Pos2, Rect, Vec2};
use crate::state::dataset::AdjustDirection;
use crate::state::settings::ViewSettings;

/// Vertical offset from a marker's center to its value label.
pub const LABEL_OFFSET: f32 = 40.0;
/// Vertical offset from a marker's center to the top edge of its up button.
pub const UP_BUTTON_OFFSET: f32 = -70.0;
/// Vertical offset from a marker's center to the top edge of its down button.
pub const DOWN_BUTTON_OFFSET: f32 = 60.0;
pub const BUTTON_SIZE: Vec2 = Vec2::new(22.0, 22.0);

/// Linearly remap `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// One dot on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub value: f64,
    pub center: Pos2,
    pub diameter: f32,
}

impl Marker {
    pub fn label_pos(&self) -> Pos2 {
        self.center + Vec2::new(0.0, LABEL_OFFSET)
    }

    /// Screen rect of the up or down control for this marker.
    pub fn button_rect(&self, direction: AdjustDirection) -> Rect {
        let dy = match direction {
            AdjustDirection::Up => UP_BUTTON_OFFSET,
            AdjustDirection::Down => DOWN_BUTTON_OFFSET,
        };
        let top_center = self.center + Vec2::new(0.0, dy);
        Rect::from_min_size(
            Pos2::new(top_center.x - BUTTON_SIZE.x / 2.0, top_center.y),
            BUTTON_SIZE,
        )
    }
}

/// Lay out one marker per value across `canvas`.
///
/// Markers are spread evenly between the horizontal margins in dataset order
/// and centered vertically. Diameter scales with the value between the
/// dataset's min and max.
pub fn layout_markers(values: &[f64], canvas: Rect, view: &ViewSettings) -> Vec<Marker> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let left = (canvas.left() + view.horizontal_margin) as f64;
    let right = (canvas.right() - view.horizontal_margin) as f64;
    let y = canvas.center().y;
    let last = (values.len() - 1) as f64;

    let d_min = view.min_marker_diameter as f64;
    let d_max = view.max_marker_diameter as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() == 1 {
                canvas.center().x as f64
            } else {
                map_range(i as f64, 0.0, last, left, right)
            };
            let diameter = if max > min {
                map_range(value, min, max, d_min, d_max)
            } else {
                (d_min + d_max) / 2.0
            };
            Marker {
                index: i,
                value,
                center: Pos2::new(x as f32, y),
                diameter: diameter as f32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 400.0))
    }

    #[test]
    fn map_range_endpoints_and_midpoint() {
        assert_eq!(map_range(0.0, 0.0, 10.0, 50.0, 750.0), 50.0);
        assert_eq!(map_range(10.0, 0.0, 10.0, 50.0, 750.0), 750.0);
        assert_eq!(map_range(5.0, 0.0, 10.0, 50.0, 750.0), 400.0);
    }

    #[test]
    fn empty_dataset_has_no_markers() {
        assert!(layout_markers(&[], canvas(), &ViewSettings::default()).is_empty());
    }

    #[test]
    fn markers_span_between_margins() {
        let markers = layout_markers(&[3.0, 5.0, 8.0, 12.0], canvas(), &ViewSettings::default());
        assert_eq!(markers.len(), 4);
        assert_eq!(markers[0].center, Pos2::new(50.0, 200.0));
        assert_eq!(markers[3].center, Pos2::new(750.0, 200.0));
        assert_eq!(markers[0].diameter, 10.0);
        assert_eq!(markers[3].diameter, 30.0);
    }

    #[test]
    fn single_marker_is_centered() {
        let markers = layout_markers(&[7.0], canvas(), &ViewSettings::default());
        assert_eq!(markers[0].center, Pos2::new(400.0, 200.0));
        assert_eq!(markers[0].diameter, 20.0);
    }

    #[test]
    fn equal_values_use_middle_diameter() {
        let markers = layout_markers(&[2.0, 2.0, 2.0], canvas(), &ViewSettings::default());
        assert!(markers.iter().all(|m| m.diameter == 20.0));
    }

    #[test]
    fn order_follows_dataset_not_value() {
        let markers = layout_markers(&[5.0, 4.0], canvas(), &ViewSettings::default());
        assert_eq!(markers[0].value, 5.0);
        assert!(markers[0].center.x < markers[1].center.x);
        assert!(markers[0].diameter > markers[1].diameter);
    }

    #[test]
    fn buttons_sit_above_and_below() {
        let markers = layout_markers(&[1.0, 2.0], canvas(), &ViewSettings::default());
        let up = markers[0].button_rect(AdjustDirection::Up);
        let down = markers[0].button_rect(AdjustDirection::Down);
        assert_eq!(up.top(), 130.0);
        assert_eq!(down.top(), 260.0);
        assert_eq!(up.center().x, markers[0].center.x);
        assert_eq!(markers[0].label_pos().y, 240.0);
    }
}
