//! Error handling for the access engine
//!
//! Denials are ordinary values ([`crate::routing::AuthorizationVerdict`]); the
//! error type only surfaces them when a caller asks for a `Result`.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{AccessError, Result};
