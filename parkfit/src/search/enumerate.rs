use crate::error::ParkFitError;
use itertools::Itertools;
use std::ops::Range;

/// Largest subset for which all orientation assignments fit in a `u64` bitmask.
pub const MAX_SUBSET_SIZE: usize = 63;

/// Lazily enumerates all non-empty subsets of `0..n`, grouped by size.
///
/// Yields `(size, combinations)` for `size = 1..=n` in ascending order. Each group iterates the
/// index combinations of that size in lexicographic order, every subset exactly once.
pub fn subsets_by_size(
    n: usize,
) -> impl Iterator<Item = (usize, impl Iterator<Item = Vec<usize>>)> {
    (1..=n).map(move |size| (size, (0..n).combinations(size)))
}

/// All orientation assignments for a subset of `k` listings: the bitmasks `0..2^k`.
/// Bit `j` of a mask selects the rotated orientation for the `j`-th listing.
#[derive(Debug, Clone)]
pub struct OrientationMasks {
    range: Range<u64>,
}

impl OrientationMasks {
    pub fn new(k: usize) -> Result<Self, ParkFitError> {
        if k > MAX_SUBSET_SIZE {
            return Err(ParkFitError::InternalSearchFailure(format!(
                "cannot enumerate orientations of {k} listings (limit is {MAX_SUBSET_SIZE})"
            )));
        }
        Ok(Self {
            range: 0..(1u64 << k),
        })
    }
}

impl Iterator for OrientationMasks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.range.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_grouped_by_ascending_size() {
        let groups = subsets_by_size(3)
            .map(|(size, combos)| (size, combos.collect_vec()))
            .collect_vec();

        assert_eq!(
            groups,
            vec![
                (1, vec![vec![0], vec![1], vec![2]]),
                (2, vec![vec![0, 1], vec![0, 2], vec![1, 2]]),
                (3, vec![vec![0, 1, 2]]),
            ]
        );
    }

    #[test]
    fn no_subsets_of_nothing() {
        assert_eq!(subsets_by_size(0).count(), 0);
    }

    #[test]
    fn every_subset_is_enumerated_once() {
        let n = 6;
        let total: usize = subsets_by_size(n).map(|(_, c)| c.count()).sum();
        assert_eq!(total, (1 << n) - 1);
    }

    #[test]
    fn orientation_masks() {
        assert_eq!(OrientationMasks::new(0).unwrap().collect_vec(), vec![0]);
        assert_eq!(OrientationMasks::new(2).unwrap().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(OrientationMasks::new(10).unwrap().count(), 1024);
        assert_eq!(
            OrientationMasks::new(MAX_SUBSET_SIZE).unwrap().size_hint().0 as u64,
            1u64 << MAX_SUBSET_SIZE
        );
        assert!(matches!(
            OrientationMasks::new(MAX_SUBSET_SIZE + 1),
            Err(ParkFitError::InternalSearchFailure(_))
        ));
    }
}
