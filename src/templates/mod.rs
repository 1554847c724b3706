pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{data_error_modal, filter_form, offer_card};
pub use layouts::desktop::desktop_layout;
