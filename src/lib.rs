pub mod cli;
pub mod commands;
pub mod converters;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod render;
pub mod telemetry;

pub use error::{GenError, Result};
