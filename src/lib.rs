//! Resistor color-band codec library.
//!
//! This library provides the core functionality for the OhmCode application:
//! the bidirectional codec between resistance values and color-band
//! sequences, the E12 standard-series classifier, the text codec for
//! human-readable resistance strings, and the session state used by
//! interactive front-ends.

// Module declarations
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod models;
pub mod session;
