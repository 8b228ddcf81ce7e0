pub mod api;
pub mod app_config;
pub mod logging;
pub mod session;
