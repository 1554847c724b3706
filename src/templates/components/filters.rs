use crate::domain::{FeatureTag, HousingType, PriceTier};
use crate::filters::controls::{
    FEATURE_CONTROL_PREFIX, GUESTS_CONTROL, PLACEHOLDER_VALUE, PRICE_CONTROL, ROOMS_CONTROL,
    TYPE_CONTROL,
};
use crate::filters::SelectionState;
use crate::templates::components::card::rooms_label;
use maud::{html, Markup};

const PRICE_OPTIONS: [(PriceTier, &str); 3] = [
    (PriceTier::Middle, "10 000 - 50 000 ₽"),
    (PriceTier::Low, "Under 10 000 ₽"),
    (PriceTier::High, "Over 50 000 ₽"),
];
const ROOM_OPTIONS: [u32; 3] = [1, 2, 3];
const GUEST_OPTIONS: [(u32, &str); 3] = [(2, "Two guests"), (1, "One guest"), (0, "Not for guests")];

/// The map filter form, reflecting `selection`. With `disabled` set every
/// control is rendered inert.
pub fn filter_form(selection: &SelectionState, disabled: bool) -> Markup {
    html! {
        form class=(if disabled { "map__filters map__filters--disabled" } else { "map__filters" }) action="#" autocomplete="off" {
            select name=(TYPE_CONTROL) id=(TYPE_CONTROL) class="map__filter" disabled[disabled] {
                option value=(PLACEHOLDER_VALUE) selected[selection.housing_type.is_none()] { "Any type of housing" }
                @for t in HousingType::ALL {
                    option value=(t.as_str()) selected[selection.housing_type == Some(t)] { (t.label()) }
                }
            }
            select name=(PRICE_CONTROL) id=(PRICE_CONTROL) class="map__filter" disabled[disabled] {
                option value=(PLACEHOLDER_VALUE) selected[selection.price_tier.is_none()] { "Any price" }
                @for (tier, label) in PRICE_OPTIONS {
                    option value=(tier.as_str()) selected[selection.price_tier == Some(tier)] { (label) }
                }
            }
            select name=(ROOMS_CONTROL) id=(ROOMS_CONTROL) class="map__filter" disabled[disabled] {
                option value=(PLACEHOLDER_VALUE) selected[selection.rooms.is_none()] { "Any number of rooms" }
                @for rooms in ROOM_OPTIONS {
                    option value=(rooms) selected[selection.rooms == Some(rooms)] { (rooms_label(rooms)) }
                }
            }
            select name=(GUESTS_CONTROL) id=(GUESTS_CONTROL) class="map__filter" disabled[disabled] {
                option value=(PLACEHOLDER_VALUE) selected[selection.guests.is_none()] { "Any number of guests" }
                @for (guests, label) in GUEST_OPTIONS {
                    option value=(guests) selected[selection.guests == Some(guests)] { (label) }
                }
            }
            fieldset id="housing-features" class="map__features" disabled[disabled] {
                @for tag in FeatureTag::ALL {
                    input
                        type="checkbox"
                        name="features"
                        value=(tag.as_str())
                        id={ (FEATURE_CONTROL_PREFIX) (tag.as_str()) }
                        class="map__checkbox visually-hidden"
                        checked[selection.features.contains(&tag)];
                    label class={ "map__feature map__feature--" (tag.as_str()) } for={ (FEATURE_CONTROL_PREFIX) (tag.as_str()) } {
                        (tag.label())
                    }
                }
            }
        }
    }
}
