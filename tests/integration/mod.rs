//! Integration tests for portal-access
//!
//! These tests exercise the public API against a realistic portal tree.

pub mod config_tests;
pub mod navigation_tests;
pub mod property_tests;
