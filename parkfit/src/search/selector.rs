use crate::entities::{Listing, LocationResult, subset_price};
use crate::error::ParkFitError;
use crate::lanes::LaneModel;
use crate::search::{OrientationMasks, PackingSearch, SearchStats, subsets_by_size};
use crate::util::assertions::lanes_untouched;
use itertools::Itertools;
use log::{debug, trace};

/// Checks whether the vehicles fit into `subset` under any orientation assignment.
///
/// Every assignment gets a freshly built [`LaneModel`]. Stops at the first assignment that fits.
pub fn check_fit(
    vehicles: &[u32],
    subset: &[&Listing],
    search: &mut PackingSearch,
    stats: &mut SearchStats,
) -> Result<bool, ParkFitError> {
    for mask in OrientationMasks::new(subset.len())? {
        let mut model = LaneModel::build(subset, mask);
        stats.n_orientations += 1;
        if search.pack(vehicles, &mut model) {
            return Ok(true);
        }
        debug_assert!(lanes_untouched(&model, subset, mask));
    }
    Ok(false)
}

/// Finds the cheapest set of listings at one location that holds all vehicles.
///
/// Subsets are tried by increasing size. Once any subset of a given size fits, the cheapest of that
/// size is returned and larger subsets are never considered. Among equally priced subsets the first
/// one enumerated wins. Returns `None` if no subset of the location fits.
pub fn cheapest_for_location(
    location_id: &str,
    listings: &[Listing],
    vehicles: &[u32],
) -> Result<(Option<LocationResult>, SearchStats), ParkFitError> {
    let mut stats = SearchStats::default();
    let mut search = PackingSearch::new();

    for (size, combinations) in subsets_by_size(listings.len()) {
        let mut cheapest: Option<(u64, Vec<&Listing>)> = None;

        for indices in combinations {
            let subset = indices.iter().map(|&i| &listings[i]).collect_vec();
            stats.n_subsets += 1;
            if !check_fit(vehicles, &subset, &mut search, &mut stats)? {
                continue;
            }
            let price = subset_price(&subset)?;
            if cheapest.as_ref().is_none_or(|(best, _)| price < *best) {
                cheapest = Some((price, subset));
            }
        }

        stats.n_nodes = search.n_nodes;
        if let Some((price, subset)) = cheapest {
            debug!(
                "[SEARCH] location {location_id}: cheapest feasible subset of size {size} costs {price}"
            );
            let result = LocationResult::from_subset(location_id, &subset)?;
            return Ok((Some(result), stats));
        }
        trace!("[SEARCH] location {location_id}: no feasible subset of size {size}");
    }

    debug!("[SEARCH] location {location_id}: no feasible subset");
    Ok((None, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, length: u32, width: u32, price: u64) -> Listing {
        Listing::new(id, length, width, "1", price).unwrap()
    }

    #[test]
    fn check_fit_tries_rotations() {
        // only fits when rotated: 1 lane of 100 instead of 10 lanes of 10
        let l = listing("1", 10, 100, 0);
        let mut stats = SearchStats::default();
        let mut search = PackingSearch::new();

        assert!(check_fit(&[60], &[&l], &mut search, &mut stats).unwrap());
        assert_eq!(stats.n_orientations, 2);
    }

    #[test]
    fn check_fit_stops_at_first_fitting_orientation() {
        let l = listing("1", 50, 50, 0);
        let mut stats = SearchStats::default();
        let mut search = PackingSearch::new();

        assert!(check_fit(&[50], &[&l], &mut search, &mut stats).unwrap());
        assert_eq!(stats.n_orientations, 1);
    }

    #[test]
    fn smaller_feasible_size_wins_over_cheaper_pair() {
        let listings = [
            listing("big", 40, 10, 100),
            listing("a", 20, 10, 10),
            listing("b", 20, 10, 10),
        ];
        let (result, stats) = cheapest_for_location("1", &listings, &[20, 20]).unwrap();
        let result = result.unwrap();

        assert_eq!(result.listing_ids, vec!["big"]);
        assert_eq!(result.total_price_in_cents, 100);
        assert_eq!(stats.n_subsets, 3);
    }

    #[test]
    fn first_of_equally_priced_subsets_wins() {
        let listings = [
            listing("b", 20, 10, 10),
            listing("a", 20, 10, 10),
        ];
        let (result, _) = cheapest_for_location("1", &listings, &[20]).unwrap();
        assert_eq!(result.unwrap().listing_ids, vec!["b"]);
    }

    #[test]
    fn infeasible_location_yields_nothing() {
        let listings = [listing("a", 10, 10, 10), listing("b", 10, 10, 10)];
        let (result, stats) = cheapest_for_location("1", &listings, &[11]).unwrap();
        assert!(result.is_none());
        assert_eq!(stats.n_subsets, 3);
    }
}
