//! Common test utilities for scenario and property tests.
//!
//! This module provides:
//! - Key byte sequences and scripted terminals (`terminal`)
//! - `FakeTerminal`: a terminal that can refuse raw mode or lose input
//! - Fixtures: reusable trees and loaders (`fixtures`)

#![allow(dead_code)]

pub mod terminal;

pub use fixtures::*;
pub use terminal::*;
