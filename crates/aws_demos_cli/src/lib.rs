//! AWS-oriented adapters, handlers, and example binaries for the single-call
//! command collection.
//!
//! This crate owns SDK integration details (service clients, sync/async
//! bridging, stderr telemetry) and exposes a single runtime module boundary
//! for the shared command contract. Each binary under `src/bin/` is one
//! standalone example: validate arguments, build one request, issue one call,
//! print the outcome.

pub mod adapters;
pub mod handlers;
pub mod runtime;
pub mod telemetry;
