use crate::domain::Listing;
use crate::errors::LoadError;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the one-shot offers load currently stands.
#[derive(Debug, Clone)]
pub enum DatasetState {
    Pending,
    Ready(Arc<[Listing]>),
    Failed(LoadError),
}

impl DatasetState {
    pub fn is_pending(&self) -> bool {
        matches!(self, DatasetState::Pending)
    }
}

/// Write half of the dataset source. Resolving consumes it, so the dataset
/// can only be delivered once.
#[derive(Debug)]
pub struct DatasetSender {
    tx: watch::Sender<DatasetState>,
}

/// Read half of the dataset source. Cheap to clone; every clone observes the
/// same single delivery.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    rx: watch::Receiver<DatasetState>,
}

/// Creates a pending dataset source together with the sender that resolves it.
pub fn dataset_channel() -> (DatasetSender, DatasetSource) {
    let (tx, rx) = watch::channel(DatasetState::Pending);
    (DatasetSender { tx }, DatasetSource { rx })
}

impl DatasetSender {
    pub fn resolve(self, result: Result<Vec<Listing>, LoadError>) {
        let state = match result {
            Ok(listings) => DatasetState::Ready(listings.into()),
            Err(err) => DatasetState::Failed(err),
        };
        // send_replace never fails, even with every receiver gone.
        self.tx.send_replace(state);
    }
}

impl DatasetSource {
    /// A source that is already resolved with `listings`.
    pub fn ready(listings: Vec<Listing>) -> Self {
        let (tx, source) = dataset_channel();
        tx.resolve(Ok(listings));
        source
    }

    /// Current state without waiting.
    pub fn state(&self) -> DatasetState {
        self.rx.borrow().clone()
    }

    /// Waits until the dataset is delivered.
    ///
    /// Returns immediately once resolved. If the sender is dropped without
    /// resolving, the load counts as failed.
    pub async fn wait(&self) -> Result<Arc<[Listing]>, LoadError> {
        let mut rx = self.rx.clone();
        let state = match rx.wait_for(|state| !state.is_pending()).await {
            Ok(state) => (*state).clone(),
            Err(_) => return Err(LoadError::SourceDropped),
        };

        match state {
            DatasetState::Ready(listings) => Ok(listings),
            DatasetState::Failed(err) => Err(err),
            DatasetState::Pending => Err(LoadError::SourceDropped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HousingType;
    use crate::tests::utils::listing;

    #[tokio::test]
    async fn ready_source_resolves_immediately() {
        let source = DatasetSource::ready(vec![listing(HousingType::Flat, 100, 1, 1, None)]);

        let listings = source.wait().await.unwrap();

        assert_eq!(listings.len(), 1);
    }

    #[tokio::test]
    async fn waiters_see_a_late_delivery() {
        let (tx, source) = dataset_channel();
        assert!(source.state().is_pending());

        let waiter = {
            let source = source.clone();
            tokio::spawn(async move { source.wait().await })
        };
        tokio::task::yield_now().await;

        tx.resolve(Ok(vec![listing(HousingType::House, 100, 1, 1, None)]));

        let listings = waiter.await.unwrap().unwrap();
        assert_eq!(listings.len(), 1);
    }

    #[tokio::test]
    async fn failure_is_shared_with_every_clone() {
        let (tx, source) = dataset_channel();
        let other = source.clone();

        tx.resolve(Err(LoadError::Status(500)));

        assert_eq!(source.wait().await.unwrap_err(), LoadError::Status(500));
        assert_eq!(other.wait().await.unwrap_err(), LoadError::Status(500));
    }

    #[tokio::test]
    async fn dropped_sender_counts_as_failure() {
        let (tx, source) = dataset_channel();
        drop(tx);

        assert_eq!(source.wait().await.unwrap_err(), LoadError::SourceDropped);
    }
}
