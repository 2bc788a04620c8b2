//! Observability for nmagrade.
//! `tracing` crate with `EnvFilter`, per-component log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with, resolve_filter, LOG_ENV_VAR};
