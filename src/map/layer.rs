use crate::domain::Listing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Map centre and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    /// Central Tokyo, the view every filter pass starts from.
    pub const DEFAULT: MapView = MapView {
        center: LatLng {
            lat: 35.68950,
            lng: 139.69171,
        },
        zoom: 10,
    };
}

impl Default for MapView {
    fn default() -> Self {
        MapView::DEFAULT
    }
}

/// The map's marker group, as seen by the filtering engine.
///
/// A refresh always calls `clear_markers` and `reset_view` first, then
/// `add_marker` once per visible listing.
pub trait MarkerLayer: Send + 'static {
    fn clear_markers(&mut self);

    fn reset_view(&mut self, view: MapView);

    fn add_marker(&mut self, listing: &Listing);
}
