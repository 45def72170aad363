pub mod openapi;

pub use openapi::{ApiDocument, load_openapi};
