pub mod card;
pub mod error;
pub mod filters;

pub use card::offer_card;
pub use error::data_error_modal;
pub use filters::filter_form;
