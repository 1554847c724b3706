// templates/pages/map.rs

use crate::filters::SelectionState;
use crate::templates::{components::filter_form, desktop_layout};
use maud::{html, Markup};

/// Everything the map section shows at one moment.
pub struct MapPageVm {
    pub selection: SelectionState,
    pub filters_disabled: bool,
    pub markers: Markup,
    pub error_modal: Option<Markup>,
}

pub fn map_page(vm: &MapPageVm) -> Markup {
    desktop_layout(
        "Keksobooking",
        html! {
            section class="map" {
                h2 class="visually-hidden" { "Similar offers nearby" }
                (vm.markers)
                div class="map__filters-container" {
                    (filter_form(&vm.selection, vm.filters_disabled))
                    @if let Some(modal) = &vm.error_modal {
                        (modal)
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoadError;
    use crate::templates::components::data_error_modal;

    #[test]
    fn page_shows_modal_and_disabled_filters_after_failure() {
        let vm = MapPageVm {
            selection: SelectionState::default(),
            filters_disabled: true,
            markers: html! { div class="map__canvas" {} },
            error_modal: Some(data_error_modal(&LoadError::SourceDropped)),
        };

        let html = map_page(&vm).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("map__filters--disabled"));
        assert!(html.contains("data__error"));
    }
}
