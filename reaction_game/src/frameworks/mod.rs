// Frameworks layer: configuration and runtime bootstrap.

pub mod app;
pub mod config;
