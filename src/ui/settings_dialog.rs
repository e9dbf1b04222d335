use crate::state::settings::ViewSettings;

/// Show the view settings window. Returns `true` while it should stay open,
/// `false` when the user closes it.
pub fn show_settings_dialog(ctx: &egui::Context, view: &mut ViewSettings) -> bool {
    let mut open = true;
    let mut close = false;

    egui::Window::new("View Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Markers").strong().size(15.0));
            ui.add_space(4.0);

            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    egui::Grid::new("view_settings_grid")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Smallest diameter");
                            ui.add(egui::Slider::new(&mut view.min_marker_diameter, 2.0..=60.0).suffix(" px"));
                            ui.end_row();

                            ui.label("Largest diameter");
                            ui.add(egui::Slider::new(&mut view.max_marker_diameter, 2.0..=60.0).suffix(" px"));
                            ui.end_row();

                            ui.label("Side margin");
                            ui.add(egui::Slider::new(&mut view.horizontal_margin, 0.0..=200.0).suffix(" px"));
                            ui.end_row();

                            ui.label("Text size");
                            ui.add(egui::Slider::new(&mut view.text_size, 10.0..=24.0));
                            ui.end_row();
                        });

                    ui.checkbox(&mut view.show_value_labels, "Show value under each marker");
                });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add(egui::Button::new("Restore Defaults").min_size(egui::vec2(0.0, 28.0))).clicked() {
                    *view = ViewSettings::default();
                }
                if ui.add(egui::Button::new("Close").min_size(egui::vec2(80.0, 28.0))).clicked() {
                    close = true;
                }
            });
        });

    view.normalize();
    open && !close
}
