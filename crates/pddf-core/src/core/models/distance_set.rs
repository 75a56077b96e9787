/// Pairwise distances of one frame, in `(i, j)` enumeration order
/// (ascending `i`, then ascending `j`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceSet {
    values: Vec<f64>,
}

impl DistanceSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Largest distance in the set, or `None` when the set is empty.
    ///
    /// This is a safe upper bound for histogram binning when no better estimate
    /// of the first coordination shell is known.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

impl From<Vec<f64>> for DistanceSet {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl AsRef<[f64]> for DistanceSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a DistanceSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_returns_none_for_empty_set() {
        assert_eq!(DistanceSet::default().max(), None);
    }

    #[test]
    fn max_returns_largest_distance() {
        let set = DistanceSet::new(vec![1.0, 3.5, 2.25]);
        assert_eq!(set.max(), Some(3.5));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn preserves_insertion_order() {
        let set: DistanceSet = vec![1.0, 0.0, 1.0].into();
        assert_eq!(set.as_slice(), &[1.0, 0.0, 1.0]);
        assert_eq!(set.into_vec(), vec![1.0, 0.0, 1.0]);
    }
}
