//! Water-quality and tide-table chart viewer.
//!
//! The library holds everything that does not draw: loading, normalization,
//! statistics, tide scraping, the art scenes and the UI state. The binary
//! adds the egui panels on top.

pub mod art;
pub mod cli;
pub mod color;
pub mod data;
pub mod state;
