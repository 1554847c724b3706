// debounce.rs

use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

type Callback<T> = Arc<dyn Fn(T) -> BoxFuture<'static, ()> + Send + Sync>;

/// Collapses bursts of calls into a single trailing call.
///
/// Every [`invoke`](Debouncer::invoke) replaces the pending timer, so the
/// callback only runs once `window` has passed without another invoke, and
/// it receives the arguments of the last one. Each debouncer owns its own
/// timer slot; two debouncers never cancel each other.
///
/// Must be invoked from within a tokio runtime.
pub struct Debouncer<T> {
    window: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(window: Duration, callback: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            window,
            callback: Arc::new(move |args| callback(args).boxed()),
            pending: Mutex::new(None),
        }
    }

    pub fn invoke(&self, args: T) {
        let callback = Arc::clone(&self.callback);
        let window = self.window;

        let timer = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Once the window elapsed the call is no longer "pending";
            // detach it so a later invoke can't abort it halfway.
            tokio::spawn(callback(args));
        });

        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(timer);

        if let Some(previous) = previous {
            if !previous.is_finished() {
                trace!("debounced call superseded");
            }
            previous.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = pending {
            timer.abort();
        }
    }
}
