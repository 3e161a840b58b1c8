pub mod api;
pub mod app;
pub mod card;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod ui;
