// The binary in main.rs is a thin terminal front end over these modules;
// integration tests and benchmarks drive them directly.

pub mod app;
pub mod config;
pub mod content;
pub mod event;
pub mod exercise;
pub mod logging;
pub mod notice;
pub mod quiz;
pub mod store;
pub mod streak;
pub mod text;
pub mod ui;
pub mod vocab;
