//! BMI Check Shared Library
//!
//! Core BMI service plus the wire types shared by the backend and the
//! WASM module.

pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
