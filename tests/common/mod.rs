//! Common test utilities for portal-access
//!
//! - Route tree and identity fixtures
//! - Assertions over filtered trees and breadcrumb trails

pub mod assertions;
pub mod fixtures;

pub use fixtures::{IdentityFactory, perm, portal_tree};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
