//! Terminal chat client library for `Parley`.

pub mod app;
pub mod config;
pub mod ui;
