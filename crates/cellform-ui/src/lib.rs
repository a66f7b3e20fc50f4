//! Terminal UI components for the cellform system.
//!
//! Provides Ayu-themed color styling, terminal detection, and rendering of
//! formula diagnostics for CLI output.

pub mod diagnostic;
pub mod styles;
pub mod terminal;
