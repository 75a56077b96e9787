//! # PDDF Core Library
//!
//! Pair distance distribution functions (PDDFs) for molecular dynamics trajectories, and the
//! estimation of nearest-neighbour cutoff radii used by coordination-number analysis.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Frame`, `PairSelectionPolicy`,
//!   `DistanceSet`), the pairwise distance calculator, the normalized histogram and the
//!   first-minimum cutoff estimator, plus the `FrameSource` contract for trajectory readers.
//!
//! - **[`engine`]: Configuration and Bookkeeping.** Tunable estimator parameters, the per-frame
//!   distance cache, and the error type that carries frame/policy/parameter context.
//!
//! - **[`workflows`]: The Public API.** Single-frame entry points that validate the request,
//!   compute distances and return a cutoff report.
//!
//! Pair enumeration is quadratic in the number of atoms of a frame and linear in the number
//! of frames processed; callers analysing large systems should budget for that.

pub mod core;
pub mod engine;
pub mod workflows;
