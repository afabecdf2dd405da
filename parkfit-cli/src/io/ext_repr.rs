use serde::{Deserialize, Serialize};

/// A group of identical vehicles, as found in a request body.
///
/// Numeric fields are signed so that negative values reach validation instead of failing to parse.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtVehicle {
    pub length: i64,
    pub quantity: i64,
}

/// A rentable storage listing, as found in the catalogue.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtListing {
    pub id: String,
    pub length: i64,
    pub width: i64,
    pub location_id: String,
    pub price_in_cents: i64,
}

/// The cheapest feasible set of listings at a location, as returned in a response body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtLocationResult {
    pub location_id: String,
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}

/// Body of a failed response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtError {
    pub error: String,
}
