// src/filters/engine.rs

use crate::dataset::DatasetSource;
use crate::domain::Listing;
use crate::filters::selection::SelectionState;
use crate::map::{MapView, MarkerLayer};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Most markers shown on the map at once.
pub const MAX_SIMILAR_OFFERS: usize = 10;

/// Applies `selection` to the full `dataset`.
///
/// The result keeps dataset order and holds at most [`MAX_SIMILAR_OFFERS`]
/// entries. Pure: the same inputs always yield the same output.
pub fn compute_filtered_list<'a>(
    dataset: &'a [Listing],
    selection: &SelectionState,
) -> Vec<&'a Listing> {
    dataset
        .iter()
        .filter(|listing| selection.matches(listing))
        .take(MAX_SIMILAR_OFFERS)
        .collect()
}

/// Owns the selection state and redraws the marker layer from the full
/// dataset whenever asked.
pub struct FilterEngine<L> {
    dataset: DatasetSource,
    selection: Mutex<SelectionState>,
    layer: Mutex<L>,
}

impl<L: MarkerLayer> FilterEngine<L> {
    pub fn new(dataset: DatasetSource, layer: L) -> Self {
        Self {
            dataset,
            selection: Mutex::new(SelectionState::default()),
            layer: Mutex::new(layer),
        }
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> SelectionState {
        self.selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update_selection(&self, update: impl FnOnce(&mut SelectionState)) {
        let mut selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        update(&mut selection);
    }

    /// Runs `f` against the marker layer.
    pub fn with_layer<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        let mut layer = self.layer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut layer)
    }

    /// Clears the map, then places one marker per listing that passes the
    /// current selection. Waits for the dataset if it hasn't arrived yet.
    ///
    /// Returns how many markers were placed. A failed dataset places none
    /// and leaves the layer untouched.
    pub async fn refresh(&self) -> usize {
        let dataset = match self.dataset.wait().await {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(error = %err, "skipping marker refresh, offers unavailable");
                return 0;
            }
        };

        // Read the selection after the wait so a delivery that took a while
        // still renders the latest choices.
        let selection = self.selection();
        let visible = compute_filtered_list(&dataset, &selection);

        // One lock for the whole pass: refreshes that were all waiting on the
        // same delivery must not interleave their clears and adds.
        self.with_layer(|layer| {
            layer.clear_markers();
            layer.reset_view(MapView::DEFAULT);
            for listing in &visible {
                layer.add_marker(listing);
            }
        });

        debug!(
            total = dataset.len(),
            shown = visible.len(),
            ?selection,
            "markers refreshed"
        );

        visible.len()
    }
}
