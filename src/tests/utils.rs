use crate::domain::{Author, FeatureTag, HousingType, Listing, Location, Offer, PriceTier};
use crate::filters::SelectionState;
use crate::map::{MapView, MarkerLayer};
use rand::rngs::StdRng;
use rand::Rng;

/// Builds a listing with only the filtered fields filled in.
pub fn listing(
    housing_type: HousingType,
    price: u32,
    rooms: u32,
    guests: u32,
    features: Option<&[FeatureTag]>,
) -> Listing {
    Listing {
        author: Author::default(),
        offer: Offer {
            title: String::new(),
            address: String::new(),
            price,
            housing_type,
            rooms,
            guests,
            checkin: String::new(),
            checkout: String::new(),
            features: features.map(|tags| tags.iter().copied().collect()),
            description: String::new(),
            photos: Vec::new(),
        },
        location: Location {
            lat: 35.68,
            lng: 139.69,
        },
    }
}

/// Same as [`listing`] but titled, so results are easy to compare.
pub fn titled(title: &str, mut listing: Listing) -> Listing {
    listing.offer.title = title.to_string();
    listing
}

pub fn titles(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.offer.title.clone()).collect()
}

/// Marker layer that remembers every refresh pass.
#[derive(Debug, Default)]
pub struct RecordingLayer {
    /// One entry per `clear_markers`, holding the titles added afterwards.
    pub passes: Vec<Vec<String>>,
    pub views: Vec<MapView>,
}

impl RecordingLayer {
    pub fn last_pass(&self) -> Option<&Vec<String>> {
        self.passes.last()
    }
}

impl MarkerLayer for RecordingLayer {
    fn clear_markers(&mut self) {
        self.passes.push(Vec::new());
    }

    fn reset_view(&mut self, view: MapView) {
        self.views.push(view);
    }

    fn add_marker(&mut self, listing: &Listing) {
        if let Some(pass) = self.passes.last_mut() {
            pass.push(listing.offer.title.clone());
        }
    }
}

pub fn random_listing(rng: &mut StdRng, index: usize) -> Listing {
    let housing_type = HousingType::ALL[rng.gen_range(0..HousingType::ALL.len())];
    let features = if rng.gen_bool(0.15) {
        None
    } else {
        let tags: Vec<FeatureTag> = FeatureTag::ALL
            .into_iter()
            .filter(|_| rng.gen_bool(0.5))
            .collect();
        Some(tags)
    };

    titled(
        &format!("offer-{index}"),
        listing(
            housing_type,
            rng.gen_range(0..80_000),
            rng.gen_range(1..4),
            rng.gen_range(0..4),
            features.as_deref(),
        ),
    )
}

pub fn random_listings(rng: &mut StdRng, count: usize) -> Vec<Listing> {
    (0..count).map(|i| random_listing(rng, i)).collect()
}

pub fn random_selection(rng: &mut StdRng) -> SelectionState {
    let tiers = [PriceTier::Low, PriceTier::Middle, PriceTier::High];
    let mut selection = SelectionState {
        housing_type: rng
            .gen_bool(0.3)
            .then(|| HousingType::ALL[rng.gen_range(0..HousingType::ALL.len())]),
        price_tier: rng.gen_bool(0.3).then(|| tiers[rng.gen_range(0..tiers.len())]),
        rooms: rng.gen_bool(0.3).then(|| rng.gen_range(1..4)),
        guests: rng.gen_bool(0.3).then(|| rng.gen_range(0..4)),
        ..Default::default()
    };
    for tag in FeatureTag::ALL {
        if rng.gen_bool(0.15) {
            selection.set_feature(tag, true);
        }
    }
    selection
}
