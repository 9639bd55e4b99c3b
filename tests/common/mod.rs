//! Common test utilities for Nexus CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and config home, plus CLI helpers
//! - Assertion macros: `assert_success!`, `assert_output_contains!`
//! - Fixtures: Reusable CSV content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
