pub mod appointment_list;
pub mod calendar;
pub mod header;
pub mod toast_container;
