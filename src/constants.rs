//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the supported resistance domain.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "OhmCode";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "ohmcode";

/// Smallest resistance accepted by the `decode` entry points, in ohms.
pub const MIN_OHMS: f64 = 0.1;

/// Largest resistance accepted by the `decode` entry points, in ohms (999 MΩ).
pub const MAX_OHMS: f64 = 999_000_000.0;

/// Relative-error threshold under which a resistance counts as a standard value.
pub const STANDARD_VALUE_TOLERANCE: f64 = 0.01;
