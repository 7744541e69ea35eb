pub mod portfolio;
pub mod render_config;
