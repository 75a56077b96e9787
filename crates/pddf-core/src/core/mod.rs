//! # Core Module
//!
//! Stateless building blocks for pair distance analysis.
//!
//! - **Data Models** ([`models`]) - Frames, pair selection policies and distance sets
//! - **Distance Distributions** ([`pddf`]) - Pairwise distances, histograms and cutoff estimation
//! - **Trajectory Access** ([`io`]) - The contract trajectory readers fulfil, with an in-memory reader
//!
//! Nothing in this module holds cross-call mutable state, so every operation can be run
//! concurrently on different frames.

pub mod io;
pub mod models;
pub mod pddf;
pub mod utils;
