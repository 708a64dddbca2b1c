//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: portal, breadcrumb, cache and logging sections
//! - `auth_validators`: role catalog section
//! - `tests`: test suite for all validators

mod auth_validators;
mod config_validators;
mod trait_def;

pub use trait_def::Validate;
