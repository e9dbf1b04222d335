use eframe::egui;
use crate::processing::statistics::format_value;
use crate::state::app_state::{AppState, VERSION};
use crate::ui::dataset_canvas::{self, CanvasAction};
use crate::ui::results_panel::{self, ResultsAction};
use crate::ui::settings_dialog;

const INPUT_HINT: &str = "Enter numbers separated by commas (e.g., 5, 3, 8, 12)";

/// Put `text` on the system clipboard.
fn copy_to_clipboard(text: String) -> Result<(), String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("Failed to access clipboard: {e}"))?;
    clipboard
        .set_text(text)
        .map_err(|e| format!("Failed to copy to clipboard: {e}"))
}

/// The main StatScope application.
pub struct StatScopeApp {
    pub state: AppState,
    /// An error message shown in the footer until dismissed.
    pub error_message: Option<String>,
    pub show_about: bool,
    pub show_settings: bool,
}

impl StatScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        // --- Global UI style ---
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(12.0),
        );

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);

        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self {
            state,
            error_message: None,
            show_about: false,
            show_settings: false,
        }
    }

    fn handle_canvas_action(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::Adjust(index, direction) => {
                if let Err(e) = self.state.adjust(index, direction) {
                    tracing::warn!("{e}");
                    self.error_message = Some(e);
                }
            }
            CanvasAction::None => {}
        }
    }

    fn handle_results_action(&mut self, action: ResultsAction) {
        let Some(results) = self.state.results.as_ref() else {
            return;
        };
        let copied = match action {
            ResultsAction::CopySummary => copy_to_clipboard(results.summary()),
            ResultsAction::CopyJson => results.to_json().and_then(copy_to_clipboard),
            ResultsAction::None => return,
        };
        match copied {
            Ok(()) => tracing::info!("Copied statistics to clipboard"),
            Err(e) => {
                tracing::error!("{e}");
                self.error_message = Some(e);
            }
        }
    }
}

impl eframe::App for StatScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut vis = self.state.theme.visuals();
        vis.window_corner_radius = egui::CornerRadius::same(8);
        vis.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.active.corner_radius = egui::CornerRadius::same(6);
        ctx.set_visuals(vis);

        // --- Header panel ---
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let heading_response = ui.heading("StatScope");
                heading_response.context_menu(|ui| {
                    if ui.button("About StatScope").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.separator();

                if ui.button("Settings").clicked() {
                    self.show_settings = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.state.theme {
                        crate::state::theme::Theme::Dark => "Light Mode",
                        crate::state::theme::Theme::Light => "Dark Mode",
                    };
                    let theme_hover = format!("Current theme: {}", self.state.theme.label());
                    if ui.button(theme_label).on_hover_text(theme_hover).clicked() {
                        self.state.theme = self.state.theme.toggle();
                    }

                    ui.separator();
                    ui.small(format!("v{VERSION}"));
                });
            });
        });

        // --- Footer panel ---
        let mut reset = false;
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 6)))
            .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let reset_btn = egui::Button::new(egui::RichText::new("Reset").strong())
                    .min_size(egui::vec2(90.0, 28.0));
                if ui.add(reset_btn).on_hover_text("Clear all values").clicked() {
                    reset = true;
                }

                ui.separator();

                let count = self.state.dataset.len();
                let label = if count == 1 { "1 value" } else { &format!("{count} values") };
                ui.label(egui::RichText::new(label).weak());
                if let Some((min, max)) = self.state.dataset.bounds() {
                    ui.label(
                        egui::RichText::new(format!(
                            "from {} to {}",
                            format_value(min),
                            format_value(max)
                        ))
                        .weak(),
                    );
                }

                if let Some(msg) = &self.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
                    if ui.small_button("dismiss").clicked() {
                        self.error_message = None;
                    }
                }
            });
        });
        if reset {
            self.state.reset();
            self.error_message = None;
        }

        // --- Results strip, only once there is data ---
        let mut results_action = ResultsAction::None;
        if !self.state.dataset.is_empty() {
            if let Some(results) = self.state.results.as_ref() {
                let theme = self.state.theme;
                let text_size = self.state.view.text_size;
                egui::TopBottomPanel::bottom("results")
                    .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(12, 8)))
                    .show(ctx, |ui| {
                        results_action =
                            results_panel::show_results_panel(ui, results, &theme, text_size);
                    });
            }
        }
        self.handle_results_action(results_action);

        // --- Input row and canvas ---
        let mut canvas_action = CanvasAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("{INPUT_HINT} and press Calculate:"));
            ui.add_space(2.0);

            let mut calculate = false;
            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.state.input_text)
                        .hint_text(INPUT_HINT)
                        .desired_width((ui.available_width() - 110.0).max(120.0)),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    calculate = true;
                    input.request_focus();
                }
                let calc_btn = egui::Button::new(egui::RichText::new("Calculate").strong())
                    .min_size(egui::vec2(100.0, 26.0));
                if ui.add(calc_btn).clicked() {
                    calculate = true;
                }
            });
            if calculate {
                self.state.calculate();
                self.error_message = None;
            }

            ui.add_space(8.0);
            canvas_action = dataset_canvas::show_dataset_canvas(&self.state, ui);
        });
        self.handle_canvas_action(canvas_action);

        // --- Settings window ---
        if self.show_settings {
            self.show_settings = settings_dialog::show_settings_dialog(ctx, &mut self.state.view);
        }

        // --- About window (hidden menu) ---
        if self.show_about {
            egui::Window::new("About StatScope")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading("StatScope");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("Explore mean, median, mode and range.");
                    ui.add_space(10.0);
                    ui.label("  \u{2022} Type numbers and press Calculate");
                    ui.label("  \u{2022} Use the arrows to nudge a value by one");
                    ui.label("  \u{2022} Reset clears everything");
                    ui.add_space(10.0);
                    ui.label("Right-click the title for this menu.");
                });
        }
    }
}
