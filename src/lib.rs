pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod popup;
pub mod ui;
pub mod youtube;
