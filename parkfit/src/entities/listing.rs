use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

/// A rentable, rectangular storage space at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier of the listing
    pub id: String,
    pub length: u32,
    pub width: u32,
    /// Identifier of the location the listing belongs to
    pub location_id: String,
    /// The cost of renting this listing
    pub price_in_cents: u64,
}

impl Listing {
    pub fn new(
        id: impl Into<String>,
        length: u32,
        width: u32,
        location_id: impl Into<String>,
        price_in_cents: u64,
    ) -> Result<Self, InvalidInputError> {
        let listing = Self {
            id: id.into(),
            length,
            width,
            location_id: location_id.into(),
            price_in_cents,
        };
        listing.validate()?;
        Ok(listing)
    }

    /// Checks that both dimensions are positive.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        match self.length > 0 && self.width > 0 {
            true => Ok(()),
            false => Err(InvalidInputError::NonPositiveDimension {
                listing_id: self.id.clone(),
            }),
        }
    }
}

/// The two ways a listing's dimensions can be mapped onto lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Lanes run along the length: `width / 10` lanes, each `length` long
    NotRotated,
    /// Lanes run along the width: `length / 10` lanes, each `width` long
    Rotated,
}

impl Orientation {
    /// Orientation of the `j`-th listing of a subset under orientation assignment `mask`.
    /// A set bit selects [`Orientation::Rotated`].
    pub fn from_mask(mask: u64, j: usize) -> Self {
        match (mask >> j) & 1 == 1 {
            true => Orientation::Rotated,
            false => Orientation::NotRotated,
        }
    }
}
