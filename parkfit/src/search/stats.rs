use std::iter::Sum;
use std::ops::AddAssign;

/// Counters describing how much work a search performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Listing subsets checked for feasibility
    pub n_subsets: u64,
    /// Orientation assignments for which a lane model was built and searched
    pub n_orientations: u64,
    /// Tentative vehicle placements made by the feasibility search
    pub n_nodes: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.n_subsets += rhs.n_subsets;
        self.n_orientations += rhs.n_orientations;
        self.n_nodes += rhs.n_nodes;
    }
}

impl Sum for SearchStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}
