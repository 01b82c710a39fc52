//! Todo List Frontend
//!
//! Browser client for a REST to-do list, built with Leptos.

pub mod app;
pub mod client;
pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod models;
pub mod status;
pub mod store;

pub use app::App;
