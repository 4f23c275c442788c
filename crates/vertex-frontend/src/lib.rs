//! Polygon Vertex Explorer Frontend
//!
//! egui-based application that teaches polygon vertices.

mod actions;
mod app;
mod config;
mod paint;
mod panels;
mod state;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::VertexExplorerApp;
