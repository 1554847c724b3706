use crate::domain::{FeatureTag, HousingType, Listing, PriceTier};
use std::collections::BTreeSet;

/// Current value of every filter dimension.
///
/// `None` means the control sits on its placeholder and the dimension is not
/// filtered. An empty `features` set likewise filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub housing_type: Option<HousingType>,
    pub price_tier: Option<PriceTier>,
    pub rooms: Option<u32>,
    pub guests: Option<u32>,
    pub features: BTreeSet<FeatureTag>,
}

impl SelectionState {
    /// Whether `listing` passes every active dimension.
    pub fn matches(&self, listing: &Listing) -> bool {
        let offer = &listing.offer;

        self.housing_type.map_or(true, |t| offer.housing_type == t)
            && self
                .price_tier
                .map_or(true, |tier| PriceTier::from_price(offer.price) == tier)
            && self.rooms.map_or(true, |rooms| offer.rooms == rooms)
            && self.guests.map_or(true, |guests| offer.guests == guests)
            && listing.has_features(&self.features)
    }

    /// Checks or unchecks one feature box.
    pub fn set_feature(&mut self, tag: FeatureTag, checked: bool) {
        if checked {
            self.features.insert(tag);
        } else {
            self.features.remove(&tag);
        }
    }
}
