//! Pair distance distribution functions.
//!
//! - [`distances`] enumerates atom pairs of one frame under a [`PairSelectionPolicy`]
//! - [`histogram`] bins a distance set into a normalized histogram
//! - [`cutoff`] locates the first local minimum of that histogram
//!
//! [`PairSelectionPolicy`]: crate::core::models::policy::PairSelectionPolicy

pub mod cutoff;
pub mod distances;
pub mod histogram;
