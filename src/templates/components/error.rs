use crate::errors::LoadError;
use maud::{html, Markup};

/// Popup announcing that the offers could not be loaded.
pub fn data_error_modal(err: &LoadError) -> Markup {
    html! {
        section class="data__error" role="alert" {
            h2 class="data__error__title" { "Couldn't load offers" }
            p class="data__error__message" {
                "Similar offers are unavailable right now. " (err.to_string())
            }
        }
    }
}
