//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! The embedding shell calls [`init_tracing`] and [`setup`] once at
//! startup and then drives the directory from its event loop.

use std::path::{Path, PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config;
use crate::database::{self, seed, Repository};
use crate::error::Result;
use crate::services::{ActivityDirectory, ActivityService};

/// Central application state holding the synchronized working set
pub struct AppState {
    pub directory: ActivityDirectory,
    pub app_data_dir: PathBuf,
}

/// Initialize logging. Called once by the shell before anything else.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigmap=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Application setup - called once on startup.
///
/// Opens (creating if absent) the durable store under `app_data_dir`,
/// seeds the starter records into a brand-new store, and loads the first
/// working set. Open failures propagate to the caller; the shell surfaces
/// them as a fatal startup notification.
pub async fn setup(app_data_dir: &Path) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(app_data_dir)?;

    let pool = database::create_pool(&app_data_dir.join(config::DB_FILE_NAME)).await?;
    let service = ActivityService::new(Repository::new(pool));

    let mut directory = ActivityDirectory::new(service);
    directory.initialize(&seed::starter_activities()).await?;

    tracing::info!(
        "Application initialized successfully ({} activities)",
        directory.working_set().len()
    );

    Ok(AppState {
        directory,
        app_data_dir: app_data_dir.to_path_buf(),
    })
}
