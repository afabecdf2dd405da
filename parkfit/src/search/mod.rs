mod enumerate;
mod feasibility;
mod selector;
mod stats;

#[doc(inline)]
pub use enumerate::MAX_SUBSET_SIZE;
#[doc(inline)]
pub use enumerate::OrientationMasks;
#[doc(inline)]
pub use enumerate::subsets_by_size;
#[doc(inline)]
pub use feasibility::PackingSearch;
#[doc(inline)]
pub use feasibility::can_pack;
#[doc(inline)]
pub use selector::check_fit;
#[doc(inline)]
pub use selector::cheapest_for_location;
#[doc(inline)]
pub use stats::SearchStats;
