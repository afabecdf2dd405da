use crate::io::ext_repr::{ExtListing, ExtVehicle};
use parkfit::InvalidInputError;
use parkfit::entities::{Listing, VehicleSpec};

/// Converts the vehicles of a request into the library's representation.
pub fn import_vehicles(ext_vehicles: &[ExtVehicle]) -> Result<Vec<VehicleSpec>, InvalidInputError> {
    ext_vehicles
        .iter()
        .map(|ev| {
            let length = positive_u32("length", ev.length)?;
            let quantity = positive_u32("quantity", ev.quantity)?;
            VehicleSpec::new(length, quantity)
        })
        .collect()
}

/// Converts the catalogue into the library's representation.
pub fn import_listings(ext_listings: &[ExtListing]) -> Result<Vec<Listing>, InvalidInputError> {
    ext_listings
        .iter()
        .map(|el| {
            let length = positive_u32("length", el.length)?;
            let width = positive_u32("width", el.width)?;
            let price = u64::try_from(el.price_in_cents).map_err(|_| {
                InvalidInputError::OutOfRange {
                    field: "price_in_cents",
                    value: el.price_in_cents,
                }
            })?;
            Listing::new(el.id.clone(), length, width, el.location_id.clone(), price)
        })
        .collect()
}

fn positive_u32(field: &'static str, value: i64) -> Result<u32, InvalidInputError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(InvalidInputError::OutOfRange { field, value }),
    }
}
