// page.rs
//
// Error display boundary and the load-failure watcher.

use crate::dataset::DatasetSource;
use crate::errors::LoadError;
use crate::templates::data_error_modal;
use maud::Markup;
use tracing::error;

/// Shows a dataset load failure to the user.
pub trait ErrorDisplay {
    fn show_load_error(&mut self, err: &LoadError);
}

/// Error popup that also locks every filter control for the session.
#[derive(Debug, Default)]
pub struct DataErrorModal {
    modal: Option<Markup>,
}

impl DataErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters stay disabled for good once a load failed; there is no retry.
    pub fn filters_disabled(&self) -> bool {
        self.modal.is_some()
    }

    pub fn modal(&self) -> Option<&Markup> {
        self.modal.as_ref()
    }
}

impl ErrorDisplay for DataErrorModal {
    fn show_load_error(&mut self, err: &LoadError) {
        self.modal = Some(data_error_modal(err));
    }
}

/// Waits for the dataset and hands a failure to `display`.
///
/// Returns `true` when the load failed.
pub async fn report_load_failure<D: ErrorDisplay>(dataset: &DatasetSource, display: &mut D) -> bool {
    match dataset.wait().await {
        Ok(_) => false,
        Err(err) => {
            error!(error = %err, "offers unavailable, disabling filters");
            display.show_load_error(&err);
            true
        }
    }
}
