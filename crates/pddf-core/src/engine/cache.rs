use crate::core::models::distance_set::DistanceSet;
use crate::core::models::policy::PairSelectionPolicy;
use std::collections::HashMap;

/// Memoizes distance sets per `(frame index, policy)`.
///
/// Owned by the caller; repeated analyses of the same frame and policy (for instance
/// with different `r_max` values) reuse the quadratic pair enumeration.
#[derive(Debug, Default, Clone)]
pub struct DistanceCache {
    data: HashMap<(usize, PairSelectionPolicy), DistanceSet>,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        frame_index: usize,
        policy: PairSelectionPolicy,
        distances: DistanceSet,
    ) {
        self.data.insert((frame_index, policy), distances);
    }

    pub fn get(&self, frame_index: usize, policy: &PairSelectionPolicy) -> Option<&DistanceSet> {
        self.data.get(&(frame_index, policy.clone()))
    }

    /// Returns the cached set, computing and storing it on a miss.
    ///
    /// Errors from `compute` are returned unchanged and nothing is stored.
    pub fn get_or_try_insert_with<E, F>(
        &mut self,
        frame_index: usize,
        policy: &PairSelectionPolicy,
        compute: F,
    ) -> Result<&DistanceSet, E>
    where
        F: FnOnce() -> Result<DistanceSet, E>,
    {
        let key = (frame_index, policy.clone());
        if !self.data.contains_key(&key) {
            let distances = compute()?;
            self.data.insert(key.clone(), distances);
        }
        Ok(&self.data[&key])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drops every cached set belonging to `frame_index`.
    pub fn evict_frame(&mut self, frame_index: usize) {
        self.data.retain(|(index, _), _| *index != frame_index);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
