use crate::core::models::frame::Frame;
use crate::core::models::policy::PairSelectionPolicy;
use crate::core::pddf::distances::DistanceError;
use std::collections::BTreeSet;
use std::error::Error;

/// Defines the interface trajectory readers expose to the distance analysis.
///
/// Implementors own the file-format details. The analysis only needs random access to
/// frames and the set of species observed over the whole trajectory.
pub trait FrameSource {
    /// The error type for frame access.
    type Error: Error + Send + Sync + 'static;

    /// Number of frames available.
    fn num_frames(&self) -> usize;

    /// Reads the frame at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the frame cannot be read.
    fn read_frame(&self, index: usize) -> Result<Frame, Self::Error>;

    /// Distinct species labels observed across every frame, in sorted order.
    fn species(&self) -> BTreeSet<String>;
}

/// Checks a species-filtered policy against the trajectory-wide species set.
///
/// Policies without a label always pass.
///
/// # Errors
///
/// Returns [`DistanceError::InvalidLabel`] if the label never occurs in `source`.
pub fn validate_policy<S: FrameSource + ?Sized>(
    source: &S,
    policy: &PairSelectionPolicy,
) -> Result<(), DistanceError> {
    let Some(label) = policy.label() else {
        return Ok(());
    };
    let species = source.species();
    if species.contains(label) {
        Ok(())
    } else {
        Err(DistanceError::InvalidLabel {
            label: label.to_string(),
            available: species.into_iter().collect(),
        })
    }
}
