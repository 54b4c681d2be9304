pub mod api;
pub mod date_utils;
pub mod error;
pub mod logging;
pub mod meal_editor;
pub mod session;
