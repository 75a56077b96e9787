use crate::core::models::distance_set::DistanceSet;
use crate::core::models::frame::Frame;
use crate::core::models::policy::PairSelectionPolicy;
use crate::core::utils::geometry::{euclidean_distance, pair_count};
use nalgebra::Point3;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DistanceError {
    #[error(
        "Positions and species labels differ in length ({positions} positions, {species} labels)"
    )]
    DimensionMismatch { positions: usize, species: usize },

    #[error("Species '{label}' is not present (available species: {available:?})")]
    InvalidLabel {
        label: String,
        available: Vec<String>,
    },
}

/// Distances between every pair of atoms, without looking at species labels.
///
/// Pairs are enumerated as `(i, j)` with `i < j`, ascending `i` then ascending `j`,
/// so the result has exactly `n * (n - 1) / 2` entries.
#[instrument(level = "debug", skip_all, fields(atoms = positions.len()))]
pub fn all_pair_distances(positions: &[Point3<f64>]) -> DistanceSet {
    let values = collect_rows(positions.len(), |i, row| {
        let origin = &positions[i];
        row.extend(
            positions[i + 1..]
                .iter()
                .map(|other| euclidean_distance(origin, other)),
        );
    });
    debug!(pairs = values.len(), "Computed all pair distances.");
    DistanceSet::new(values)
}

/// Distances between the atom pairs selected by `policy`.
///
/// Output order follows the `(i, j)` enumeration of [`all_pair_distances`], restricted
/// to the selected pairs. Frames with fewer than two atoms hold no pair and yield an
/// empty set for every policy, whatever the requested label.
///
/// # Errors
///
/// - [`DistanceError::DimensionMismatch`] if `positions` and `species` differ in length,
///   including for frames with fewer than two atoms.
/// - [`DistanceError::InvalidLabel`] if the policy is [`PairSelectionPolicy::SameSpecies`]
///   and the label is carried by no atom of a frame with at least two atoms.
#[instrument(level = "debug", skip_all, fields(atoms = positions.len(), policy = %policy))]
pub fn pair_distances(
    positions: &[Point3<f64>],
    species: &[String],
    policy: &PairSelectionPolicy,
) -> Result<DistanceSet, DistanceError> {
    if positions.len() != species.len() {
        return Err(DistanceError::DimensionMismatch {
            positions: positions.len(),
            species: species.len(),
        });
    }

    if positions.len() < 2 {
        return Ok(DistanceSet::default());
    }

    if let Some(label) = policy.label() {
        if !species.iter().any(|s| s == label) {
            let available: BTreeSet<&str> = species.iter().map(String::as_str).collect();
            return Err(DistanceError::InvalidLabel {
                label: label.to_string(),
                available: available.into_iter().map(str::to_string).collect(),
            });
        }
    }

    if matches!(policy, PairSelectionPolicy::All) {
        return Ok(all_pair_distances(positions));
    }

    let values = collect_rows(positions.len(), |i, row| {
        let (origin, origin_species) = (&positions[i], species[i].as_str());
        for j in (i + 1)..positions.len() {
            if policy.includes(origin_species, &species[j]) {
                row.push(euclidean_distance(origin, &positions[j]));
            }
        }
    });

    debug!(
        pairs = values.len(),
        candidates = pair_count(positions.len()),
        "Computed filtered pair distances."
    );
    Ok(DistanceSet::new(values))
}

/// [`pair_distances`] over the positions and species of a [`Frame`].
pub fn frame_pair_distances(
    frame: &Frame,
    policy: &PairSelectionPolicy,
) -> Result<DistanceSet, DistanceError> {
    pair_distances(frame.positions(), frame.species(), policy)
}

/// Runs `fill_row(i, row)` for every `i` and concatenates the rows in ascending `i`.
#[cfg(not(feature = "parallel"))]
fn collect_rows<F>(n: usize, fill_row: F) -> Vec<f64>
where
    F: Fn(usize, &mut Vec<f64>),
{
    let mut values = Vec::with_capacity(pair_count(n));
    for i in 0..n {
        fill_row(i, &mut values);
    }
    values
}

#[cfg(feature = "parallel")]
fn collect_rows<F>(n: usize, fill_row: F) -> Vec<f64>
where
    F: Fn(usize, &mut Vec<f64>) + Sync,
{
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut row = Vec::with_capacity(n - i - 1);
            fill_row(i, &mut row);
            row
        })
        .collect();
    rows.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn bimetallic_cluster() -> (Vec<Point3<f64>>, Vec<String>) {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.9, 0.0, 0.0),
            Point3::new(0.0, 2.9, 0.0),
            Point3::new(0.0, 0.0, 2.9),
            Point3::new(2.9, 2.9, 0.0),
            Point3::new(1.45, 1.45, 1.45),
            Point3::new(-2.9, 0.1, 0.3),
        ];
        let species = labels(&["Au", "Ag", "Au", "Ag", "Au", "Au", "Ag"]);
        (positions, species)
    }

    #[test]
    fn all_policy_enumerates_pairs_in_ascending_index_order() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let species = labels(&["A", "A", "A"]);
        let distances = pair_distances(&positions, &species, &PairSelectionPolicy::All).unwrap();
        assert_eq!(distances.as_slice(), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn all_policy_yields_triangular_number_of_pairs() {
        let (positions, species) = bimetallic_cluster();
        let distances = pair_distances(&positions, &species, &PairSelectionPolicy::All).unwrap();
        assert_eq!(distances.len(), pair_count(positions.len()));
        assert_eq!(distances, all_pair_distances(&positions));
    }

    #[test]
    fn different_species_policy_computes_full_three_dimensional_distance() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
        let species = labels(&["A", "B"]);
        let distances =
            pair_distances(&positions, &species, &PairSelectionPolicy::DifferentSpecies).unwrap();
        assert_eq!(distances.len(), 1);
        assert!(f64_approx_equal(distances.as_slice()[0], 5.0));

        let positions = vec![Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 3.0)];
        let distances =
            pair_distances(&positions, &species, &PairSelectionPolicy::DifferentSpecies).unwrap();
        assert!(f64_approx_equal(distances.as_slice()[0], 3.0));
    }

    #[test]
    fn same_species_policy_with_single_matching_atom_is_empty() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
        let species = labels(&["A", "B"]);
        let distances =
            pair_distances(&positions, &species, &PairSelectionPolicy::same_species("A")).unwrap();
        assert!(distances.is_empty());
    }

    #[test]
    fn same_species_policy_only_returns_homo_pairs() {
        let (positions, species) = bimetallic_cluster();
        let policy = PairSelectionPolicy::same_species("Au");
        let distances = pair_distances(&positions, &species, &policy).unwrap();

        let mut expected = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if species[i] == "Au" && species[j] == "Au" {
                    expected.push(euclidean_distance(&positions[i], &positions[j]));
                }
            }
        }
        assert_eq!(distances.as_slice(), expected.as_slice());
        assert_eq!(distances.len(), pair_count(4));
    }

    #[test]
    fn policies_partition_all_pairs() {
        let (positions, species) = bimetallic_cluster();
        let all = pair_distances(&positions, &species, &PairSelectionPolicy::All).unwrap();
        let gold =
            pair_distances(&positions, &species, &PairSelectionPolicy::same_species("Au")).unwrap();
        let silver =
            pair_distances(&positions, &species, &PairSelectionPolicy::same_species("Ag")).unwrap();
        let mixed =
            pair_distances(&positions, &species, &PairSelectionPolicy::DifferentSpecies).unwrap();

        assert_eq!(gold.len() + silver.len() + mixed.len(), all.len());

        let mut combined: Vec<f64> = gold
            .iter()
            .chain(silver.iter())
            .chain(mixed.iter())
            .copied()
            .collect();
        let mut reference = all.into_vec();
        combined.sort_by(f64::total_cmp);
        reference.sort_by(f64::total_cmp);
        assert_eq!(combined, reference);
    }

    #[test]
    fn degenerate_frames_yield_empty_sets_for_every_policy() {
        let policies = [
            PairSelectionPolicy::All,
            PairSelectionPolicy::DifferentSpecies,
            PairSelectionPolicy::same_species("Au"),
        ];
        for policy in &policies {
            assert!(pair_distances(&[], &[], policy).unwrap().is_empty());
            let single = pair_distances(&[Point3::new(1.0, 2.0, 3.0)], &labels(&["Au"]), policy)
                .unwrap();
            assert!(single.is_empty());
        }
    }

    #[test]
    fn degenerate_frames_do_not_validate_labels() {
        let absent = PairSelectionPolicy::same_species("Xx");
        assert!(pair_distances(&[], &[], &absent).unwrap().is_empty());
        let single = pair_distances(&[Point3::origin()], &labels(&["Au"]), &absent).unwrap();
        assert!(single.is_empty());
    }

    #[test]
    fn degenerate_frames_still_check_dimensions() {
        assert_eq!(
            pair_distances(&[Point3::origin()], &[], &PairSelectionPolicy::All),
            Err(DistanceError::DimensionMismatch {
                positions: 1,
                species: 0
            })
        );
    }

    #[test]
    fn same_species_policy_rejects_absent_label() {
        let (positions, species) = bimetallic_cluster();
        let result = pair_distances(&positions, &species, &PairSelectionPolicy::same_species("Xx"));
        assert_eq!(
            result,
            Err(DistanceError::InvalidLabel {
                label: "Xx".to_string(),
                available: labels(&["Ag", "Au"]),
            })
        );
    }

    #[test]
    fn rejects_positions_and_species_of_different_length() {
        let positions = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let species = labels(&["Au"]);
        for policy in [
            PairSelectionPolicy::All,
            PairSelectionPolicy::DifferentSpecies,
            PairSelectionPolicy::same_species("Au"),
        ] {
            assert_eq!(
                pair_distances(&positions, &species, &policy),
                Err(DistanceError::DimensionMismatch {
                    positions: 2,
                    species: 1
                })
            );
        }
    }

    #[test]
    fn distances_are_non_negative_and_symmetric() {
        let (positions, species) = bimetallic_cluster();
        let distances = pair_distances(&positions, &species, &PairSelectionPolicy::All).unwrap();
        let mut k = 0;
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let forward = distances.as_slice()[k];
                assert!(forward >= 0.0);
                assert_eq!(forward, euclidean_distance(&positions[j], &positions[i]));
                k += 1;
            }
        }
    }

    #[test]
    fn frame_pair_distances_matches_slice_based_computation() {
        let (positions, species) = bimetallic_cluster();
        let frame = Frame::new(positions.clone(), species.clone()).unwrap();
        let policy = PairSelectionPolicy::DifferentSpecies;
        assert_eq!(
            frame_pair_distances(&frame, &policy).unwrap(),
            pair_distances(&positions, &species, &policy).unwrap()
        );
    }
}
