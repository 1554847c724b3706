pub mod map;

pub use map::{map_page, MapPageVm};
