use crate::core::pddf::distances::DistanceError;
use nalgebra::Point3;
use std::collections::BTreeSet;

/// A single simulation snapshot: atomic positions and the aligned species labels.
///
/// Positions and species are index-aligned, so `species()[i]` is the chemical symbol
/// of the atom at `positions()[i]`. A frame is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    positions: Vec<Point3<f64>>,
    species: Vec<String>,
}

impl Frame {
    /// Creates a frame from aligned positions and species labels.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::DimensionMismatch`] if the two sequences differ in length.
    pub fn new(positions: Vec<Point3<f64>>, species: Vec<String>) -> Result<Self, DistanceError> {
        if positions.len() != species.len() {
            return Err(DistanceError::DimensionMismatch {
                positions: positions.len(),
                species: species.len(),
            });
        }
        Ok(Self { positions, species })
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Distinct species labels present in this frame, in sorted order.
    pub fn distinct_species(&self) -> BTreeSet<&str> {
        self.species.iter().map(String::as_str).collect()
    }

    pub fn contains_species(&self, label: &str) -> bool {
        self.species.iter().any(|s| s == label)
    }
}
