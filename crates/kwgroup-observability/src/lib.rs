//! # kwgroup-observability
//!
//! Tracing subscriber setup and the structured events emitted by a grouping run.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
