// loader.rs
use crate::dataset::source::{dataset_channel, DatasetSource};
use crate::domain::Listing;
use crate::errors::LoadError;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// Starts fetching the offers from `url` in the background.
///
/// The returned source resolves exactly once, with the decoded offers or
/// with the reason the load failed.
pub fn spawn_http_load(client: Client, url: Url) -> DatasetSource {
    let (tx, source) = dataset_channel();

    tokio::spawn(async move {
        let result = fetch_listings(&client, url.clone()).await;
        log_outcome(url.as_str(), &result);
        tx.resolve(result);
    });

    source
}

/// Same as [`spawn_http_load`] but reads a local JSON file.
pub fn spawn_file_load(path: PathBuf) -> DatasetSource {
    let (tx, source) = dataset_channel();

    tokio::spawn(async move {
        let result = match tokio::fs::read_to_string(&path).await {
            Ok(body) => parse_listings(&body),
            Err(e) => Err(LoadError::Io(e.to_string())),
        };
        log_outcome(&path.display().to_string(), &result);
        tx.resolve(result);
    });

    source
}

async fn fetch_listings(client: &Client, url: Url) -> Result<Vec<Listing>, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_listings(&body)
}

/// Decodes the offers payload (a JSON array of listings).
pub fn parse_listings(body: &str) -> Result<Vec<Listing>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

fn log_outcome(origin: &str, result: &Result<Vec<Listing>, LoadError>) {
    match result {
        Ok(listings) => info!(origin, count = listings.len(), "offers loaded"),
        Err(err) => warn!(origin, error = %err, "offers failed to load"),
    }
}
