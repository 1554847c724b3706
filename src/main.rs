use crate::config::{Config, DataOrigin};
use crate::dataset::{spawn_file_load, spawn_http_load};
use crate::filters::{register_filter_handlers, ControlChange};
use crate::map::HtmlMarkerLayer;
use crate::page::{report_load_failure, DataErrorModal};
use crate::templates::pages::{map_page, MapPageVm};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dataset;
mod debounce;
mod domain;
mod errors;
mod filters;
mod map;
mod page;
mod templates;

#[cfg(test)]
mod tests;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1️⃣ Logging goes to stderr, the rendered page to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,offer_filters=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(origin = ?config.data_origin, debounce = ?config.debounce, "configuration loaded");

    // 2️⃣ Start loading the offers; nothing below blocks on it yet
    let dataset = match &config.data_origin {
        DataOrigin::Http(url) => {
            let client = reqwest::Client::builder()
                .timeout(config.fetch_timeout)
                .build()
                .context("Failed to build HTTP client")?;
            spawn_http_load(client, url.clone())
        }
        DataOrigin::File(path) => spawn_file_load(path.clone()),
    };

    // 3️⃣ Wire the filter controls
    let handlers = register_filter_handlers(dataset.clone(), HtmlMarkerLayer::new(), config.debounce);
    let engine = handlers.engine().clone();

    if dataset.state().is_pending() {
        info!("waiting for offers before the first render");
    }

    let mut error_display = DataErrorModal::new();
    if !report_load_failure(&dataset, &mut error_display).await {
        let shown = engine.refresh().await;
        info!(shown, "initial markers placed");

        // 4️⃣ Each stdin line is one control change: `housing-type=house`
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read control input")? {
            if line.trim().is_empty() {
                continue;
            }
            match ControlChange::parse_line(&line) {
                Ok(change) => handlers.apply(change),
                Err(e) => warn!(error = %e, "ignoring control input"),
            }
        }

        // Input closed: let the last debounced changes fire and redraw.
        handlers.drain().await;
        let placed = engine.with_layer(|layer| layer.markers().len());
        info!(placed, "final markers placed");
    }

    let vm = MapPageVm {
        selection: engine.selection(),
        filters_disabled: error_display.filters_disabled(),
        markers: engine.with_layer(|layer| layer.render()),
        error_modal: error_display.modal().cloned(),
    };
    println!("{}", map_page(&vm).into_string());

    Ok(())
}
