//! Weather lookup TUI
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod assets;
pub mod components;
pub mod config;
pub mod demo;
pub mod effect;
pub mod error;
pub mod page;
pub mod reducer;
pub mod render;
pub mod resolver;
pub mod state;
