//! Finds, for a fleet of vehicles and a catalogue of rentable storage listings, the cheapest subset of
//! listings at every location that can hold all vehicles at once.
//!
//! Listings are modelled as sets of discrete lanes (see [`lanes`]), vehicles consume lane capacity
//! equal to their length and every listing may be used in one of two orientations.

/// Entities to model the problem: vehicles, listings, the per-request instance and its results
pub mod entities;

/// Discrete lane model derived from a listing and an orientation
pub mod lanes;

/// Combinatorial search: subset and orientation enumeration, feasibility and selection
pub mod search;

/// Entry points tying all components together
pub mod solver;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::InvalidInputError;
#[doc(inline)]
pub use error::ParkFitError;
#[doc(inline)]
pub use solver::find_locations;
#[doc(inline)]
pub use solver::solve;
