#![warn(clippy::pedantic)]

mod coach;
mod config;
mod routes;
mod videos;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use robur_domain::{Catalog, Service};
use robur_storage::{CatalogStore, SqliteStore};

use crate::coach::CoachClient;
use crate::config::Settings;
use crate::routes::AppState;
use crate::videos::VideoClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::parse();

    let store = SqliteStore::open(&settings.database)
        .with_context(|| format!("failed to open database {}", settings.database.display()))?;
    let seeded = store.seed_if_empty()?;
    if seeded > 0 {
        info!("seeded empty catalog with {seeded} exercises");
    }
    let catalog = Catalog::new(store.load()?);
    info!("loaded catalog with {} exercises", catalog.len());

    let catalog_store = CatalogStore::new(catalog);
    let state = Arc::new(AppState {
        service: Service::new(catalog_store.clone()),
        catalog: catalog_store,
        store,
        videos: VideoClient::new(settings.video_api_url.clone()),
        coach: CoachClient::new(
            settings.coach_api_url.clone(),
            settings.coach_api_key.clone(),
            settings.coach_model.clone(),
        ),
        started: Instant::now(),
    });

    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(&settings.listen)
        .await
        .with_context(|| format!("failed to bind {}", settings.listen))?;
    info!("listening on {}", settings.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
