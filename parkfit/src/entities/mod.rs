mod instance;
mod listing;
mod location_result;
mod vehicle;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use instance::group_by_location;
#[doc(inline)]
pub use listing::Listing;
#[doc(inline)]
pub use listing::Orientation;
#[doc(inline)]
pub use location_result::LocationResult;
#[doc(inline)]
pub use location_result::subset_price;
#[doc(inline)]
pub use vehicle::MAX_VEHICLES;
#[doc(inline)]
pub use vehicle::VehicleSpec;
#[doc(inline)]
pub use vehicle::count_vehicles;
#[doc(inline)]
pub use vehicle::normalize_vehicles;
