// src/filters/controls.rs
//
// Translates raw form control events into typed selection changes.

use crate::domain::{FeatureTag, HousingType, PriceTier};
use crate::errors::ControlError;
use crate::filters::selection::SelectionState;

/// Value of every select while it shows its placeholder option.
pub const PLACEHOLDER_VALUE: &str = "any";

pub const TYPE_CONTROL: &str = "housing-type";
pub const PRICE_CONTROL: &str = "housing-price";
pub const ROOMS_CONTROL: &str = "housing-rooms";
pub const GUESTS_CONTROL: &str = "housing-guests";
/// Feature checkboxes are named `filter-<tag>`.
pub const FEATURE_CONTROL_PREFIX: &str = "filter-";

/// A change of one filter control, already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChange {
    HousingType(Option<HousingType>),
    Price(Option<PriceTier>),
    Rooms(Option<u32>),
    Guests(Option<u32>),
    Feature { tag: FeatureTag, checked: bool },
}

impl ControlChange {
    /// Parses a `(control id, value)` pair.
    pub fn parse(control: &str, value: &str) -> Result<Self, ControlError> {
        let value = value.trim();

        match control {
            TYPE_CONTROL => select(control, value).map(ControlChange::HousingType),
            PRICE_CONTROL => select(control, value).map(ControlChange::Price),
            ROOMS_CONTROL => {
                let rooms = select::<u32>(control, value)?;
                if rooms == Some(0) {
                    return Err(ControlError::invalid(control, value));
                }
                Ok(ControlChange::Rooms(rooms))
            }
            GUESTS_CONTROL => select(control, value).map(ControlChange::Guests),
            _ => {
                let tag = control
                    .strip_prefix(FEATURE_CONTROL_PREFIX)
                    .and_then(|name| name.parse::<FeatureTag>().ok())
                    .ok_or_else(|| ControlError::UnknownControl(control.to_string()))?;

                Ok(ControlChange::Feature {
                    tag,
                    checked: checkbox(control, value)?,
                })
            }
        }
    }

    /// Parses a `control=value` line.
    pub fn parse_line(line: &str) -> Result<Self, ControlError> {
        let (control, value) = line
            .split_once('=')
            .ok_or_else(|| ControlError::UnknownControl(line.trim().to_string()))?;
        Self::parse(control.trim(), value)
    }

    /// Writes the change into its own dimension, leaving the others alone.
    pub fn apply_to(self, selection: &mut SelectionState) {
        match self {
            ControlChange::HousingType(t) => selection.housing_type = t,
            ControlChange::Price(tier) => selection.price_tier = tier,
            ControlChange::Rooms(rooms) => selection.rooms = rooms,
            ControlChange::Guests(guests) => selection.guests = guests,
            ControlChange::Feature { tag, checked } => selection.set_feature(tag, checked),
        }
    }
}

/// The placeholder (or an empty value) maps to `None`, never to a filter.
fn select<T: std::str::FromStr>(control: &str, value: &str) -> Result<Option<T>, ControlError> {
    if value.is_empty() || value == PLACEHOLDER_VALUE {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| ControlError::invalid(control, value))
}

fn checkbox(control: &str, value: &str) -> Result<bool, ControlError> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ControlError::invalid(control, value)),
    }
}
