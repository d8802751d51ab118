pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod pages;
pub mod scheduler;
pub mod state;
pub mod style;
pub mod tui;
