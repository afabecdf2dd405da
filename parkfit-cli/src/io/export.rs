use crate::io::ext_repr::ExtLocationResult;
use parkfit::entities::LocationResult;

/// Exports the results of a search out of the library
pub fn export(results: &[LocationResult]) -> Vec<ExtLocationResult> {
    results
        .iter()
        .map(|r| ExtLocationResult {
            location_id: r.location_id.clone(),
            listing_ids: r.listing_ids.clone(),
            total_price_in_cents: r.total_price_in_cents,
        })
        .collect()
}
