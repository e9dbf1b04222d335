use crate::processing::statistics::StatisticsResult;
use crate::state::theme::{StatKind, Theme};

/// Actions that the results panel can request from the parent.
pub enum ResultsAction {
    None,
    CopySummary,
    CopyJson,
}

const BOX_HEIGHT: f32 = 50.0;

fn stat_text(results: &StatisticsResult, kind: StatKind) -> String {
    let value = match kind {
        StatKind::Mean => results.mean_label(),
        StatKind::Median => results.median_label(),
        StatKind::Mode => results.mode_label(),
        StatKind::Range => results.range_label(),
    };
    format!("{}: {}", kind.label(), value)
}

/// Four equal-width colored boxes, one per statistic.
pub fn show_results_panel(
    ui: &mut egui::Ui,
    results: &StatisticsResult,
    theme: &Theme,
    text_size: f32,
) -> ResultsAction {
    let mut action = ResultsAction::None;

    let (strip, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), BOX_HEIGHT),
        egui::Sense::hover(),
    );
    let segment = strip.width() / StatKind::ALL.len() as f32;
    let painter = ui.painter_at(strip);

    for (i, kind) in StatKind::ALL.iter().enumerate() {
        let rect = egui::Rect::from_min_size(
            strip.left_top() + egui::vec2(segment * i as f32, 0.0),
            egui::vec2(segment, BOX_HEIGHT),
        );
        painter.rect_filled(rect, egui::CornerRadius::ZERO, theme.stat_fill(*kind));

        // Long mode lists wrap inside the box.
        let galley = painter.layout(
            stat_text(results, *kind),
            egui::FontId::proportional(text_size),
            egui::Color32::BLACK,
            segment - 20.0,
        );
        let pos = egui::pos2(rect.left() + 10.0, rect.center().y - galley.size().y / 2.0);
        painter.galley(pos, galley, egui::Color32::BLACK);
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("n = {}", results.count)).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Copy as JSON").on_hover_text("Copy statistics as JSON").clicked() {
                action = ResultsAction::CopyJson;
            }
            if ui.button("Copy Summary").on_hover_text("Copy a one-line summary").clicked() {
                action = ResultsAction::CopySummary;
            }
        });
    });

    action
}
