pub mod controls;
pub mod engine;
pub mod handlers;
pub mod selection;

pub use controls::ControlChange;
pub use engine::{compute_filtered_list, FilterEngine, MAX_SIMILAR_OFFERS};
pub use handlers::{register_filter_handlers, FilterHandlers};
pub use selection::SelectionState;
