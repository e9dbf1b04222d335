pub mod app_state;
pub mod dataset;
pub mod settings;
pub mod theme;
