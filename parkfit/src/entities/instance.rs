use crate::entities::{Listing, VehicleSpec, count_vehicles, normalize_vehicles};
use crate::error::InvalidInputError;
use crate::util::assertions::vehicles_descending;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A single request: the vehicles to store and the listings to choose from, grouped by location.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Length of every vehicle, longest first
    pub vehicles: Vec<u32>,
    /// Listings per location, locations in order of first appearance in the catalogue
    pub locations: IndexMap<String, Vec<Listing>>,
}

impl Instance {
    /// Validates the input and groups the listings by location.
    pub fn new(specs: &[VehicleSpec], listings: &[Listing]) -> Result<Self, InvalidInputError> {
        for spec in specs {
            spec.validate()?;
        }
        count_vehicles(specs)?;

        let mut seen_ids = HashSet::with_capacity(listings.len());
        for listing in listings {
            listing.validate()?;
            if !seen_ids.insert(listing.id.as_str()) {
                return Err(InvalidInputError::DuplicateListingId(listing.id.clone()));
            }
        }

        let vehicles = normalize_vehicles(specs);
        debug_assert!(vehicles_descending(&vehicles));

        Ok(Self {
            vehicles,
            locations: group_by_location(listings),
        })
    }

    pub fn n_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    pub fn n_listings(&self) -> usize {
        self.locations.values().map(|l| l.len()).sum()
    }

    pub fn location(&self, location_id: &str) -> Option<&[Listing]> {
        self.locations.get(location_id).map(|l| l.as_slice())
    }
}

/// Partitions the listings by location id, keeping locations in order of first appearance and
/// listings in catalogue order.
pub fn group_by_location(listings: &[Listing]) -> IndexMap<String, Vec<Listing>> {
    let mut locations: IndexMap<String, Vec<Listing>> = IndexMap::new();
    for listing in listings {
        locations
            .entry(listing.location_id.clone())
            .or_default()
            .push(listing.clone());
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn listing(id: &str, location_id: &str) -> Listing {
        Listing::new(id, 10, 10, location_id, 100).unwrap()
    }

    #[test]
    fn locations_keep_first_seen_order() {
        let listings = [
            listing("a", "2"),
            listing("b", "1"),
            listing("c", "2"),
            listing("d", "3"),
        ];
        let instance = Instance::new(&[], &listings).unwrap();

        assert_eq!(instance.locations.keys().collect_vec(), vec!["2", "1", "3"]);
        let ids = instance.location("2").unwrap().iter().map(|l| &l.id).collect_vec();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(instance.n_listings(), 4);
    }

    #[test]
    fn duplicate_listing_ids_are_rejected() {
        let listings = [listing("a", "1"), listing("a", "2")];
        assert_eq!(
            Instance::new(&[], &listings).unwrap_err(),
            InvalidInputError::DuplicateListingId("a".to_string())
        );
    }

    #[test]
    fn unvalidated_specs_are_caught() {
        let spec = VehicleSpec {
            length: 10,
            quantity: 0,
        };
        assert!(Instance::new(&[spec], &[]).is_err());
    }

    #[test]
    fn huge_quantity_is_rejected_before_expansion() {
        let spec = VehicleSpec::new(1, u32::MAX).unwrap();
        assert!(matches!(
            Instance::new(&[spec], &[listing("a", "1")]),
            Err(InvalidInputError::TooManyVehicles { .. })
        ));
    }
}
