use super::traits::FrameSource;
use crate::core::models::frame::Frame;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TrajectoryError {
    #[error("Frame index {index} is out of range (trajectory has {num_frames} frames)")]
    FrameOutOfRange { index: usize, num_frames: usize },
}

/// A trajectory held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrajectory {
    frames: Vec<Frame>,
    species: BTreeSet<String>,
}

impl InMemoryTrajectory {
    pub fn new(frames: Vec<Frame>) -> Self {
        let species = frames
            .iter()
            .flat_map(|frame| frame.species().iter().cloned())
            .collect();
        Self { frames, species }
    }

    pub fn push(&mut self, frame: Frame) {
        self.species.extend(frame.species().iter().cloned());
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl FrameSource for InMemoryTrajectory {
    type Error = TrajectoryError;

    fn num_frames(&self) -> usize {
        self.frames.len()
    }

    fn read_frame(&self, index: usize) -> Result<Frame, Self::Error> {
        self.frames
            .get(index)
            .cloned()
            .ok_or(TrajectoryError::FrameOutOfRange {
                index,
                num_frames: self.frames.len(),
            })
    }

    fn species(&self) -> BTreeSet<String> {
        self.species.clone()
    }
}
