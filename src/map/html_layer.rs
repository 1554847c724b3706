use crate::domain::Listing;
use crate::map::layer::{LatLng, MapView, MarkerLayer};
use crate::templates::components::offer_card;
use maud::{html, Markup, PreEscaped};

/// A placed pin with its pre-rendered popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
    pub popup: String,
}

/// Marker layer that renders each pin's popup card as HTML.
#[derive(Debug, Default)]
pub struct HtmlMarkerLayer {
    view: MapView,
    markers: Vec<Marker>,
}

impl HtmlMarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The marker group as it would be handed to the map script.
    pub fn render(&self) -> Markup {
        html! {
            div
                class="map__canvas"
                data-lat=(self.view.center.lat.to_string())
                data-lng=(self.view.center.lng.to_string())
                data-zoom=(self.view.zoom)
            {
                @for marker in &self.markers {
                    div
                        class="map__pin"
                        data-lat=(marker.position.lat.to_string())
                        data-lng=(marker.position.lng.to_string())
                        title=(marker.title)
                    {
                        (PreEscaped(&marker.popup))
                    }
                }
            }
        }
    }
}

impl MarkerLayer for HtmlMarkerLayer {
    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn reset_view(&mut self, view: MapView) {
        self.view = view;
    }

    fn add_marker(&mut self, listing: &Listing) {
        self.markers.push(Marker {
            position: LatLng {
                lat: listing.location.lat,
                lng: listing.location.lng,
            },
            title: listing.offer.title.clone(),
            popup: offer_card(listing).into_string(),
        });
    }
}
