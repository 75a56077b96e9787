//! # Workflows Module
//!
//! User-facing entry points. [`cutoff`] runs the full single-frame analysis:
//! policy validation, pair distances, histogram and first-minimum cutoff.

pub mod cutoff;
