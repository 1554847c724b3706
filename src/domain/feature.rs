use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Amenity an offer can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureTag {
    Wifi,
    Dishwasher,
    Parking,
    Washer,
    Elevator,
    Conditioner,
}

impl FeatureTag {
    /// Checkbox order on the filter form.
    pub const ALL: [FeatureTag; 6] = [
        FeatureTag::Wifi,
        FeatureTag::Dishwasher,
        FeatureTag::Parking,
        FeatureTag::Washer,
        FeatureTag::Elevator,
        FeatureTag::Conditioner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureTag::Wifi => "wifi",
            FeatureTag::Dishwasher => "dishwasher",
            FeatureTag::Parking => "parking",
            FeatureTag::Washer => "washer",
            FeatureTag::Elevator => "elevator",
            FeatureTag::Conditioner => "conditioner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureTag::Wifi => "Wi-Fi",
            FeatureTag::Dishwasher => "Dishwasher",
            FeatureTag::Parking => "Parking",
            FeatureTag::Washer => "Washer",
            FeatureTag::Elevator => "Elevator",
            FeatureTag::Conditioner => "Air conditioner",
        }
    }
}

impl FromStr for FeatureTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureTag::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a feature list, silently skipping tags we don't know about and
/// treating `null` like a missing field.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<BTreeSet<FeatureTag>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;

    Ok(raw.map(|tags| {
        tags.iter()
            .filter_map(|tag| tag.parse::<FeatureTag>().ok())
            .collect()
    }))
}
