use std::fmt::{Display, Formatter};

/// The error type of the crate.
///
/// Infeasibility is never an error: a location that cannot hold the vehicles is simply absent from
/// the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkFitError {
    /// The input violates a precondition of the search and was rejected before any work was done.
    InvalidInput(InvalidInputError),
    /// The search ran into a state it cannot represent. No partial results are available.
    InternalSearchFailure(String),
}

/// Details about rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A vehicle has a length of zero.
    NonPositiveVehicleLength,
    /// A vehicle spec has a quantity of zero.
    NonPositiveQuantity { length: u32 },
    /// A listing has a zero length or width.
    NonPositiveDimension { listing_id: String },
    /// Two listings in the catalogue share the same id.
    DuplicateListingId(String),
    /// The request describes more vehicles than a single search accepts.
    TooManyVehicles { count: u64 },
    /// A numeric field in an external record is negative or does not fit the internal type.
    OutOfRange { field: &'static str, value: i64 },
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveVehicleLength => write!(f, "vehicle length must be positive"),
            Self::NonPositiveQuantity { length } => {
                write!(f, "quantity of vehicles with length {length} must be positive")
            }
            Self::NonPositiveDimension { listing_id } => {
                write!(f, "listing {listing_id} must have a positive length and width")
            }
            Self::DuplicateListingId(id) => write!(f, "listing id {id} occurs more than once"),
            Self::TooManyVehicles { count } => write!(
                f,
                "request holds {count} vehicles, at most {} are accepted",
                crate::entities::MAX_VEHICLES
            ),
            Self::OutOfRange { field, value } => {
                write!(f, "value {value} is out of range for field '{field}'")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

impl Display for ParkFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::InternalSearchFailure(msg) => write!(f, "internal search failure: {msg}"),
        }
    }
}

impl std::error::Error for ParkFitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::InternalSearchFailure(_) => None,
        }
    }
}

impl From<InvalidInputError> for ParkFitError {
    fn from(e: InvalidInputError) -> Self {
        Self::InvalidInput(e)
    }
}
