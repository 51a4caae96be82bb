//! Storefront demo application.
//!
//! Reads configuration from the environment, initialises tracing, builds the
//! single dispatcher instance with the default handlers, and runs a short
//! scenario through every bounded context.

pub mod config;
pub mod demo;
pub mod error;
pub mod telemetry;
pub mod wiring;
