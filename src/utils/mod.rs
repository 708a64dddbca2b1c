//! Utility modules for the access engine
//!
//! - **error**: error type, `Result` alias and classification helpers
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{AccessError, Result};
pub use logging::init_logging;
