pub mod dataset_canvas;
pub mod results_panel;
pub mod settings_dialog;
