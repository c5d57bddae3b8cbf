pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;
