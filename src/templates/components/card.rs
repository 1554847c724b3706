use crate::domain::Listing;
use maud::{html, Markup};

/// Popup shown when a map pin is clicked.
pub fn offer_card(listing: &Listing) -> Markup {
    let offer = &listing.offer;

    html! {
        article class="popup" {
            @if !listing.author.avatar.is_empty() {
                img class="popup__avatar" src=(listing.author.avatar) width="70" height="70" alt="Author avatar";
            }
            @if !offer.title.is_empty() {
                h3 class="popup__title" { (offer.title) }
            }
            @if !offer.address.is_empty() {
                p class="popup__text popup__text--address" { (offer.address) }
            }
            p class="popup__text popup__text--price" {
                (offer.price) " " span { "₽/night" }
            }
            h4 class="popup__type" { (offer.housing_type.label()) }
            p class="popup__text popup__text--capacity" {
                (rooms_label(offer.rooms)) " for " (guests_label(offer.guests))
            }
            @if !offer.checkin.is_empty() && !offer.checkout.is_empty() {
                p class="popup__text popup__text--time" {
                    "Check-in after " (offer.checkin) ", check-out before " (offer.checkout)
                }
            }
            @if let Some(features) = offer.features.as_ref().filter(|f| !f.is_empty()) {
                ul class="popup__features" {
                    @for feature in features {
                        li class={ "popup__feature popup__feature--" (feature.as_str()) } {
                            (feature.label())
                        }
                    }
                }
            }
            @if !offer.description.is_empty() {
                p class="popup__description" { (offer.description) }
            }
            @if !offer.photos.is_empty() {
                div class="popup__photos" {
                    @for photo in &offer.photos {
                        img class="popup__photo" src=(photo) width="45" height="40" alt="Housing photo";
                    }
                }
            }
        }
    }
}

pub fn rooms_label(rooms: u32) -> String {
    match rooms {
        1 => "1 room".to_string(),
        n => format!("{n} rooms"),
    }
}

fn guests_label(guests: u32) -> String {
    match guests {
        0 => "no guests".to_string(),
        1 => "1 guest".to_string(),
        n => format!("{n} guests"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureTag, HousingType};
    use crate::tests::utils::listing;

    #[test]
    fn card_shows_offer_details() {
        let mut house = listing(HousingType::House, 45_000, 3, 4, Some(&[FeatureTag::Wifi]));
        house.offer.title = "Garden house".to_string();
        house.offer.checkin = "14:00".to_string();
        house.offer.checkout = "12:00".to_string();

        let html = offer_card(&house).into_string();

        assert!(html.contains("Garden house"));
        assert!(html.contains("45000"));
        assert!(html.contains("House"));
        assert!(html.contains("3 rooms for 4 guests"));
        assert!(html.contains("Check-in after 14:00, check-out before 12:00"));
        assert!(html.contains("popup__feature--wifi"));
    }

    #[test]
    fn card_skips_empty_sections() {
        let flat = listing(HousingType::Flat, 1_000, 1, 0, None);

        let html = offer_card(&flat).into_string();

        assert!(html.contains("1 room for no guests"));
        assert!(!html.contains("popup__features"));
        assert!(!html.contains("popup__photos"));
        assert!(!html.contains("popup__title"));
    }

    #[test]
    fn card_escapes_listing_text() {
        let mut flat = listing(HousingType::Flat, 1_000, 1, 1, None);
        flat.offer.title = "<script>alert(1)</script>".to_string();

        let html = offer_card(&flat).into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
