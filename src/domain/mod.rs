pub mod feature;
pub mod listing;
pub mod price;

pub use feature::FeatureTag;
pub use listing::{Author, HousingType, Listing, Location, Offer};
pub use price::PriceTier;
