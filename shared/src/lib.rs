// Shared library: data models and display-formatting utilities used by
// both the engine and the chart crates.

pub mod models;
pub mod utils;
