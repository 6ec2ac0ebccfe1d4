pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;
