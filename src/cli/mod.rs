// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for drawing overlays.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `draw` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Draw command logic.
#[cfg(feature = "annotate")]
pub mod draw;

/// Message macros and verbosity.
pub mod logging;
