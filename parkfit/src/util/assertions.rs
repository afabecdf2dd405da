use crate::entities::{Listing, LocationResult};
use crate::lanes::LaneModel;
use itertools::Itertools;

pub fn vehicles_descending(vehicles: &[u32]) -> bool {
    vehicles.windows(2).all(|w| w[0] >= w[1])
}

/// Checks that a lane model left behind by a failed search equals a freshly built one.
pub fn lanes_untouched(model: &LaneModel, subset: &[&Listing], mask: u64) -> bool {
    *model == LaneModel::build(subset, mask)
}

/// Checks that `after` is `before` with every vehicle subtracted from the lane it was placed in.
pub fn placement_matches_model(
    vehicles: &[u32],
    before: &LaneModel,
    placement: &[usize],
    after: &LaneModel,
) -> bool {
    if vehicles.len() != placement.len() || before.n_lanes() != after.n_lanes() {
        return false;
    }
    let mut expected = before.lanes().to_vec();
    for (&length, &lane) in vehicles.iter().zip(placement) {
        match expected[lane].checked_sub(length) {
            Some(rem) => expected[lane] = rem,
            None => return false,
        }
    }
    expected == after.lanes()
}

/// Checks that the ids of a result are sorted and unique and that its price matches the listings.
pub fn result_is_canonical(result: &LocationResult, listings: &[Listing]) -> bool {
    let sorted_unique = result.listing_ids.iter().tuple_windows().all(|(a, b)| a < b);
    let price = result
        .listing_ids
        .iter()
        .filter_map(|id| listings.iter().find(|l| &l.id == id))
        .map(|l| l.price_in_cents)
        .sum::<u64>();
    sorted_unique && price == result.total_price_in_cents
}

pub fn results_sorted_by_price(results: &[LocationResult]) -> bool {
    results
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.total_price_in_cents <= b.total_price_in_cents)
}
