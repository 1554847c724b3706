// src/domain/listing.rs

use crate::domain::feature::{self, FeatureTag};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// listing
//  ├── author
//  │    └── avatar
//  ├── offer
//  │    ├── title
//  │    ├── address
//  │    ├── price
//  │    ├── type
//  │    ├── rooms
//  │    ├── guests
//  │    ├── checkin
//  │    ├── checkout
//  │    ├── features
//  │    ├── description
//  │    └── photos
//  └── location
//       ├── lat
//       └── lng

/// One map-addressable offer from the dataset. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub author: Author,
    pub offer: Offer,
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: String,
    pub price: u32,
    #[serde(rename = "type")]
    pub housing_type: HousingType,
    pub rooms: u32,
    pub guests: u32,
    #[serde(default)]
    pub checkin: String,
    #[serde(default)]
    pub checkout: String,
    /// `None` when the source omitted the field entirely.
    #[serde(default, deserialize_with = "feature::deserialize_lenient")]
    pub features: Option<BTreeSet<FeatureTag>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Flat,
    House,
    Bungalow,
    Palace,
    Hotel,
}

impl HousingType {
    pub const ALL: [HousingType; 5] = [
        HousingType::Flat,
        HousingType::House,
        HousingType::Bungalow,
        HousingType::Palace,
        HousingType::Hotel,
    ];

    /// Value used by the filter control and the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            HousingType::Flat => "flat",
            HousingType::House => "house",
            HousingType::Bungalow => "bungalow",
            HousingType::Palace => "palace",
            HousingType::Hotel => "hotel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HousingType::Flat => "Flat",
            HousingType::House => "House",
            HousingType::Bungalow => "Bungalow",
            HousingType::Palace => "Palace",
            HousingType::Hotel => "Hotel",
        }
    }
}

impl FromStr for HousingType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HousingType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Listing {
    /// True when the offer declares every tag in `wanted`.
    ///
    /// An absent features field only passes an empty request.
    pub fn has_features(&self, wanted: &BTreeSet<FeatureTag>) -> bool {
        if wanted.is_empty() {
            return true;
        }
        self.offer
            .features
            .as_ref()
            .is_some_and(|own| own.is_superset(wanted))
    }
}
