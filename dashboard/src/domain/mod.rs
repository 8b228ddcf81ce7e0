pub mod appointment_source;
pub mod availability_source;
pub mod calendar_widget;
pub mod dashboard_service;
pub mod fetch_tracker;
pub mod locale;
pub mod models;
pub mod selection;
pub mod view_builder;
