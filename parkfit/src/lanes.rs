use crate::entities::{Listing, Orientation};

/// Width of a single lane. Every full multiple of this in the lane-count dimension of a listing
/// yields one lane.
pub const LANE_WIDTH: u32 = 10;

/// Width of a vehicle. Does not take part in the lane derivation, which always uses [`LANE_WIDTH`].
pub const VEHICLE_WIDTH: u32 = 1;

/// Lane capacities of a single listing in the given orientation.
///
/// * [`Orientation::NotRotated`]: `width / 10` lanes of capacity `length`
/// * [`Orientation::Rotated`]: `length / 10` lanes of capacity `width`
///
/// A listing narrower than [`LANE_WIDTH`] in the lane-count dimension has no lanes.
pub fn listing_lanes(listing: &Listing, orientation: Orientation) -> Vec<u32> {
    let (n_lanes, capacity) = match orientation {
        Orientation::NotRotated => (listing.width / LANE_WIDTH, listing.length),
        Orientation::Rotated => (listing.length / LANE_WIDTH, listing.width),
    };
    vec![capacity; n_lanes as usize]
}

/// Remaining lane capacities of a subset of listings under one orientation assignment.
///
/// Lanes are stored row-major (one row per listing, in subset order) in a single vector.
/// The model is owned by exactly one feasibility attempt and mutated in place during the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneModel {
    capacities: Vec<u32>,
    /// `row_starts[i]..row_starts[i + 1]` are the lanes of the `i`-th listing
    row_starts: Vec<usize>,
}

impl LaneModel {
    /// Builds a fresh model for `subset`, orienting the `j`-th listing according to bit `j` of `mask`.
    pub fn build(subset: &[&Listing], mask: u64) -> Self {
        let mut capacities = vec![];
        let mut row_starts = Vec::with_capacity(subset.len() + 1);
        row_starts.push(0);
        for (j, listing) in subset.iter().enumerate() {
            capacities.extend(listing_lanes(listing, Orientation::from_mask(mask, j)));
            row_starts.push(capacities.len());
        }
        Self {
            capacities,
            row_starts,
        }
    }

    /// Builds a model directly from lane rows.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let mut row_starts = vec![0];
        let mut capacities = vec![];
        for row in rows {
            capacities.extend_from_slice(row);
            row_starts.push(capacities.len());
        }
        Self {
            capacities,
            row_starts,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.row_starts.len() - 1
    }

    pub fn n_lanes(&self) -> usize {
        self.capacities.len()
    }

    /// Remaining capacities of the lanes of the `i`-th listing.
    pub fn row(&self, i: usize) -> &[u32] {
        &self.capacities[self.row_starts[i]..self.row_starts[i + 1]]
    }

    /// All lanes in row-major order.
    pub fn lanes(&self) -> &[u32] {
        &self.capacities
    }

    pub(crate) fn lanes_mut(&mut self) -> &mut [u32] {
        &mut self.capacities
    }

    pub fn total_capacity(&self) -> u64 {
        self.capacities.iter().map(|&c| c as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(10, 100, Orientation::NotRotated, vec![10; 10]; "wide listing")]
    #[test_case(10, 100, Orientation::Rotated, vec![100]; "wide listing rotated")]
    #[test_case(55, 29, Orientation::NotRotated, vec![55, 55]; "partial lanes are dropped")]
    #[test_case(55, 29, Orientation::Rotated, vec![29; 5]; "partial lanes are dropped rotated")]
    #[test_case(300, 9, Orientation::NotRotated, vec![]; "narrow listing has no lanes")]
    fn lane_derivation(length: u32, width: u32, orientation: Orientation, expected: Vec<u32>) {
        let listing = Listing::new("1", length, width, "1", 0).unwrap();
        assert_eq!(listing_lanes(&listing, orientation), expected);
    }

    #[test]
    fn model_rows_follow_mask_bits() {
        let a = Listing::new("a", 10, 20, "1", 0).unwrap();
        let b = Listing::new("b", 30, 10, "1", 0).unwrap();
        let model = LaneModel::build(&[&a, &b], 0b10);

        assert_eq!(model.n_rows(), 2);
        assert_eq!(model.row(0), &[10, 10]);
        assert_eq!(model.row(1), &[10, 10, 10]);
        assert_eq!(model.lanes(), &[10, 10, 10, 10, 10]);
        assert_eq!(model.total_capacity(), 50);
    }
}
