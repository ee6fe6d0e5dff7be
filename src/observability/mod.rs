//! Structured logging setup.
//!
//! All modules log through `tracing` macros. This module installs the
//! subscriber that filters and writes those events.
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` config option (an `EnvFilter`
//! directive such as `debug` or `directory_listing=trace`), defaulting to
//! `"info"`.
//!
//! # Output
//!
//! - Native hosts: formatted lines on stderr
//! - Browser host: formatted lines on the developer console, routed by level
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `console_writer`: Developer console `MakeWriter` (wasm32 only)

#[cfg(target_arch = "wasm32")]
mod console_writer;
mod init;

pub use init::init_tracing;
