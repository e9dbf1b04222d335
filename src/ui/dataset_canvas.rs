use crate::processing::statistics::format_value;
use crate::render::markers::{layout_markers, Marker};
use crate::state::app_state::AppState;
use crate::state::dataset::AdjustDirection;

/// Actions that the canvas can request from the parent.
pub enum CanvasAction {
    None,
    Adjust(usize, AdjustDirection),
}

/// Draw the markers and their adjustment buttons. The buttons are rebuilt
/// from the dataset every frame, one up/down pair per value.
pub fn show_dataset_canvas(state: &AppState, ui: &mut egui::Ui) -> CanvasAction {
    let mut action = CanvasAction::None;
    let theme = state.theme;
    let view = &state.view;

    let size = ui.available_size();
    let (canvas, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(canvas);
    painter.rect_filled(canvas, egui::CornerRadius::same(6), theme.canvas_bg());

    if state.show_instructions {
        painter.text(
            canvas.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            "Click on the arrows to adjust data values",
            egui::FontId::proportional(view.text_size),
            theme.canvas_text(),
        );
    }

    let markers = layout_markers(state.dataset.values(), canvas, view);
    for marker in &markers {
        draw_marker(&painter, marker, state);

        ui.push_id(marker.index, |ui| {
            for direction in [AdjustDirection::Up, AdjustDirection::Down] {
                let rect = marker.button_rect(direction);
                let btn = egui::Button::new(direction.label()).min_size(rect.size());
                let hover = match direction {
                    AdjustDirection::Up => "Increase by 1",
                    AdjustDirection::Down => "Decrease by 1",
                };
                if ui.put(rect, btn).on_hover_text(hover).clicked() {
                    action = CanvasAction::Adjust(marker.index, direction);
                }
            }
        });
    }

    action
}

fn draw_marker(painter: &egui::Painter, marker: &Marker, state: &AppState) {
    let theme = state.theme;
    painter.circle_filled(marker.center, marker.diameter / 2.0, theme.marker_fill());

    if state.view.show_value_labels {
        painter.text(
            marker.label_pos(),
            egui::Align2::CENTER_TOP,
            format_value(marker.value),
            egui::FontId::proportional(state.view.text_size),
            theme.canvas_text(),
        );
    }
}
