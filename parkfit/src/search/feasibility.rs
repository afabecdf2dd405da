use crate::lanes::LaneModel;

/// Exhaustive backtracking search that places vehicles into the lanes of a [`LaneModel`].
///
/// Instead of recursing once per vehicle, the search keeps an explicit trail with the lane in which
/// every placed vehicle currently resides. Extending the trail places the next vehicle, popping it
/// undoes the last placement and resumes the scan at the following lane. The visit order is identical
/// to the recursive formulation: vehicles in the given order, lanes in row-major order.
///
/// The trail buffer is reused across calls to avoid reallocating for every orientation attempt.
#[derive(Debug, Clone, Default)]
pub struct PackingSearch {
    /// `trail[i]` is the lane holding vehicle `i`
    trail: Vec<usize>,
    /// Number of tentative placements performed over the lifetime of the search
    pub n_nodes: u64,
}

impl PackingSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to place every vehicle, returns true if all of them fit.
    ///
    /// On success the model holds the capacities remaining after the found placement.
    /// On failure every placement has been undone and the model is back in its original state.
    pub fn pack(&mut self, vehicles: &[u32], model: &mut LaneModel) -> bool {
        let lanes = model.lanes_mut();
        self.trail.clear();
        let mut first_lane = 0;

        loop {
            let depth = self.trail.len();
            let Some(&length) = vehicles.get(depth) else {
                return true;
            };

            let candidate = (first_lane..lanes.len()).find(|&lane| lanes[lane] >= length);
            match candidate {
                Some(lane) => {
                    lanes[lane] -= length;
                    self.trail.push(lane);
                    self.n_nodes += 1;
                    first_lane = 0;
                }
                None => match self.trail.pop() {
                    Some(lane) => {
                        //undo the placement of the previous vehicle and try its next lane
                        lanes[lane] += vehicles[depth - 1];
                        first_lane = lane + 1;
                    }
                    None => return false,
                },
            }
        }
    }

    /// Lanes of the placement found by the last successful [`PackingSearch::pack`], one per vehicle.
    pub fn placement(&self) -> &[usize] {
        &self.trail
    }
}

/// Decides whether all `vehicles` fit into `model`. See [`PackingSearch::pack`].
pub fn can_pack(vehicles: &[u32], model: &mut LaneModel) -> bool {
    PackingSearch::new().pack(vehicles, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assertions::placement_matches_model;

    #[test]
    fn fills_lanes_exactly() {
        let vehicles = vec![2; 5];
        let mut model = LaneModel::from_rows(&[vec![2; 5]]);
        assert!(can_pack(&vehicles, &mut model));
        assert_eq!(model.lanes(), &[0; 5]);
    }

    #[test]
    fn zero_vehicles_always_fit() {
        let mut model = LaneModel::from_rows(&[]);
        assert!(can_pack(&[], &mut model));
    }

    #[test]
    fn failure_restores_the_model() {
        let vehicles = [30, 30, 20];
        let original = LaneModel::from_rows(&[vec![40], vec![30]]);
        let mut model = original.clone();

        assert!(!can_pack(&vehicles, &mut model));
        assert_eq!(model, original);
    }

    #[test]
    fn backtracks_out_of_a_greedy_dead_end() {
        // first fit puts the 40 in the 50 lane and strands the 20
        let vehicles = [40, 30, 20];
        let original = LaneModel::from_rows(&[vec![50], vec![40]]);
        let mut model = original.clone();
        let mut search = PackingSearch::new();

        assert!(search.pack(&vehicles, &mut model));
        assert_eq!(search.placement(), &[1, 0, 0]);
        assert_eq!(model.lanes(), &[0, 0]);
        assert!(placement_matches_model(&vehicles, &original, search.placement(), &model));
    }

    #[test]
    fn vehicle_longer_than_every_lane() {
        let mut model = LaneModel::from_rows(&[vec![10, 10], vec![20]]);
        assert!(!can_pack(&[21], &mut model));
    }

    #[test]
    fn search_is_reusable() {
        let mut search = PackingSearch::new();
        let mut a = LaneModel::from_rows(&[vec![10]]);
        let mut b = LaneModel::from_rows(&[vec![10, 10]]);

        assert!(!search.pack(&[10, 10], &mut a));
        assert!(search.pack(&[10, 10], &mut b));
        assert_eq!(search.placement(), &[0, 1]);
        assert!(search.n_nodes > 0);
    }
}
