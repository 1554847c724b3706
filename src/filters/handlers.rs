// src/filters/handlers.rs

use crate::dataset::DatasetSource;
use crate::debounce::Debouncer;
use crate::domain::{FeatureTag, HousingType, PriceTier};
use crate::filters::controls::ControlChange;
use crate::filters::engine::FilterEngine;
use crate::map::MarkerLayer;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Slack past the quiet window so the last timer has already fired.
const DRAIN_MARGIN: Duration = Duration::from_millis(1);

/// One debounced change handler per filter control, all feeding the same
/// engine.
pub struct FilterHandlers<L> {
    engine: Arc<FilterEngine<L>>,
    window: Duration,
    housing_type: Debouncer<Option<HousingType>>,
    price: Debouncer<Option<PriceTier>>,
    rooms: Debouncer<Option<u32>>,
    guests: Debouncer<Option<u32>>,
    features: BTreeMap<FeatureTag, Debouncer<bool>>,
}

/// Builds the engine over `dataset` and wires a handler for every control.
///
/// Handlers may fire before the dataset arrives; their refresh then waits
/// for the delivery.
pub fn register_filter_handlers<L: MarkerLayer>(
    dataset: DatasetSource,
    layer: L,
    window: Duration,
) -> FilterHandlers<L> {
    let engine = Arc::new(FilterEngine::new(dataset, layer));

    let features = FeatureTag::ALL
        .into_iter()
        .map(|tag| {
            let toggle = handler(&engine, window, move |checked: bool| ControlChange::Feature {
                tag,
                checked,
            });
            (tag, toggle)
        })
        .collect();

    FilterHandlers {
        housing_type: handler(&engine, window, ControlChange::HousingType),
        price: handler(&engine, window, ControlChange::Price),
        rooms: handler(&engine, window, ControlChange::Rooms),
        guests: handler(&engine, window, ControlChange::Guests),
        features,
        engine,
        window,
    }
}

fn handler<L, T>(
    engine: &Arc<FilterEngine<L>>,
    window: Duration,
    to_change: impl Fn(T) -> ControlChange + Send + Sync + 'static,
) -> Debouncer<T>
where
    L: MarkerLayer,
    T: Send + 'static,
{
    let engine = Arc::clone(engine);

    Debouncer::new(window, move |value: T| {
        let engine = Arc::clone(&engine);
        let change = to_change(value);
        async move {
            debug!(?change, "filter control changed");
            engine.update_selection(|selection| change.apply_to(selection));
            engine.refresh().await;
        }
    })
}

impl<L: MarkerLayer> FilterHandlers<L> {
    pub fn engine(&self) -> &Arc<FilterEngine<L>> {
        &self.engine
    }

    /// Waits until every change invoked so far has fired.
    ///
    /// Each pending call fires within one quiet window. Once the offers are
    /// delivered its refresh never suspends, so the layer is up to date when
    /// this returns.
    pub async fn drain(&self) {
        tokio::time::sleep(self.window + DRAIN_MARGIN).await;
    }

    pub fn on_type_change(&self, housing_type: Option<HousingType>) {
        self.housing_type.invoke(housing_type);
    }

    pub fn on_price_change(&self, tier: Option<PriceTier>) {
        self.price.invoke(tier);
    }

    pub fn on_rooms_change(&self, rooms: Option<u32>) {
        self.rooms.invoke(rooms);
    }

    pub fn on_guests_change(&self, guests: Option<u32>) {
        self.guests.invoke(guests);
    }

    pub fn on_feature_toggle(&self, tag: FeatureTag, checked: bool) {
        if let Some(handler) = self.features.get(&tag) {
            handler.invoke(checked);
        }
    }

    /// Routes a parsed control change to the handler owning that control.
    pub fn apply(&self, change: ControlChange) {
        match change {
            ControlChange::HousingType(t) => self.on_type_change(t),
            ControlChange::Price(tier) => self.on_price_change(tier),
            ControlChange::Rooms(rooms) => self.on_rooms_change(rooms),
            ControlChange::Guests(guests) => self.on_guests_change(guests),
            ControlChange::Feature { tag, checked } => self.on_feature_toggle(tag, checked),
        }
    }
}
