// Terminal frontend for the radiopharma dashboard.

pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod fetch;
pub mod logging;
pub mod terminal;
pub mod ui;
