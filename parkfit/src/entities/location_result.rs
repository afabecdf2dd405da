use crate::entities::Listing;
use crate::error::ParkFitError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The cheapest feasible set of listings found at a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
    pub location_id: String,
    /// Ids of the selected listings, unique and sorted ascending
    pub listing_ids: Vec<String>,
    /// Sum of the prices of the selected listings
    pub total_price_in_cents: u64,
}

impl LocationResult {
    /// Builds the result for a subset of listings at `location_id`.
    pub fn from_subset(location_id: &str, subset: &[&Listing]) -> Result<Self, ParkFitError> {
        let total_price_in_cents = subset_price(subset)?;
        let listing_ids = subset
            .iter()
            .map(|l| l.id.clone())
            .sorted()
            .dedup()
            .collect_vec();

        Ok(Self {
            location_id: location_id.to_string(),
            listing_ids,
            total_price_in_cents,
        })
    }
}

/// Sum of the prices of all listings in the subset.
pub fn subset_price(subset: &[&Listing]) -> Result<u64, ParkFitError> {
    subset.iter().try_fold(0u64, |acc, l| {
        acc.checked_add(l.price_in_cents).ok_or_else(|| {
            ParkFitError::InternalSearchFailure(format!(
                "total price overflows at listing {}",
                l.id
            ))
        })
    })
}
