use crate::entities::{Instance, Listing, LocationResult, VehicleSpec};
use crate::error::ParkFitError;
use crate::search::{SearchStats, cheapest_for_location};
use crate::util::SearchConfig;
use crate::util::assertions::{result_is_canonical, results_sorted_by_price};
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of a [`solve`] call.
#[derive(Debug, Clone)]
pub struct Solution {
    /// One result per location that can hold all vehicles, cheapest first
    pub location_results: Vec<LocationResult>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Finds the cheapest feasible set of listings for every location, sorted ascending by price.
///
/// Locations where the vehicles do not fit are omitted. Equally priced locations keep the order in
/// which they first appear in the catalogue.
pub fn find_locations(
    vehicles: &[VehicleSpec],
    listings: &[Listing],
) -> Result<Vec<LocationResult>, ParkFitError> {
    let instance = Instance::new(vehicles, listings)?;
    solve(&instance, SearchConfig::default()).map(|s| s.location_results)
}

/// Searches every location of the instance and aggregates the results.
pub fn solve(instance: &Instance, config: SearchConfig) -> Result<Solution, ParkFitError> {
    let start = Instant::now();
    let vehicles = instance.vehicles.as_slice();

    let search_location = |(location_id, listings): (&String, &Vec<Listing>)| {
        cheapest_for_location(location_id, listings, vehicles)
    };

    //collecting preserves the location order, both sequentially and in parallel
    let per_location = match config.parallel {
        true => instance
            .locations
            .par_iter()
            .map(search_location)
            .collect::<Result<Vec<_>, ParkFitError>>()?,
        false => instance
            .locations
            .iter()
            .map(search_location)
            .collect::<Result<Vec<_>, ParkFitError>>()?,
    };

    let stats = per_location.iter().map(|(_, s)| *s).sum::<SearchStats>();
    let location_results = sort_by_price(per_location.into_iter().filter_map(|(r, _)| r).collect());

    debug_assert!(location_results.iter().all(|r| {
        instance
            .location(&r.location_id)
            .is_some_and(|listings| result_is_canonical(r, listings))
    }));
    debug_assert!(results_sorted_by_price(&location_results));

    let elapsed = start.elapsed();
    info!(
        "[SOLVE] {} vehicles, {} locations: {} feasible, searched in {:.3}ms",
        instance.n_vehicles(),
        instance.locations.len(),
        location_results.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(Solution {
        location_results,
        stats,
        elapsed,
    })
}

/// Stable sort, ascending by total price.
pub fn sort_by_price(mut results: Vec<LocationResult>) -> Vec<LocationResult> {
    results.sort_by_key(|r| r.total_price_in_cents);
    results
}
