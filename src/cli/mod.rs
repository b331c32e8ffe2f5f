//! CLI command handlers for OhmCode.
//!
//! This module provides headless, scriptable access to the resistor codec
//! for automation, testing, and CI/CD integration.

pub mod colors;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod relayout;
pub mod text;

// Re-export types used by main.rs and tests
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
pub use encode::EncodeArgs;
pub use relayout::RelayoutArgs;
pub use text::{FormatArgs, ParseArgs};
