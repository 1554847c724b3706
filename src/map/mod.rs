mod html_layer;
mod layer;

pub use html_layer::{HtmlMarkerLayer, Marker};
pub use layer::{LatLng, MapView, MarkerLayer};
