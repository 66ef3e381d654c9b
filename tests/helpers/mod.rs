//! Test helpers module
//!
//! This module provides utilities and helpers for testing CourseDesk:
//! a fake REST backend and a ready-made application context.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;

pub use backend_mock::*;
pub use test_context::*;
