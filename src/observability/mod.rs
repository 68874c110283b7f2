//! # Observability
//!
//! Structured logging to stderr. There are no metrics or traces to export for
//! a one-shot lookup.

pub mod logging;

pub use logging::init_logging;
