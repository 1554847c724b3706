mod loader;
mod source;

pub use loader::{parse_listings, spawn_file_load, spawn_http_load};
pub use source::{dataset_channel, DatasetSender, DatasetSource, DatasetState};
