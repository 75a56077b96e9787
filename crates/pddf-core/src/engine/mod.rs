//! # Engine Module
//!
//! Configuration and bookkeeping shared by the workflows.
//!
//! - **Configuration** ([`config`]) - Estimator parameters, TOML loading and a builder
//! - **Caching** ([`cache`]) - Per-frame memoization of computed distance sets
//! - **Error Handling** ([`error`]) - Errors annotated with the frame, policy and parameters involved

pub mod cache;
pub mod config;
pub mod error;
