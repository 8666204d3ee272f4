//! VitaminBot HTTP server binary.
//!
//! Loads configuration from the environment, wires the adapters into the
//! handlers and serves the chat and schedule endpoints.
//!
//! # Environment Variables
//!
//! - `VITAMIN_BOT__SERVER__HOST` / `VITAMIN_BOT__SERVER__PORT`: bind address
//! - `VITAMIN_BOT__STORAGE__DATA_FILE`: schedule JSON file
//! - `VITAMIN_BOT__STORAGE__EXPORT_DIR`: export directory
//! - `RUST_LOG`: log filter (overrides `VITAMIN_BOT__SERVER__LOG_LEVEL`)

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitamin_bot::adapters::http::{app_router, ChatHandlers, ScheduleHandlers};
use vitamin_bot::adapters::{
    InMemoryDialogStateStore, JsonFileScheduleRepository, LocalExportStorage, SystemClock,
};
use vitamin_bot::application::ChatHandler;
use vitamin_bot::config::AppConfig;
use vitamin_bot::ports::{Clock, DialogStateStore, ExportFileStorage, ScheduleRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    tracing::info!(
        bot = %config.bot.name,
        environment = ?config.server.environment,
        data_file = %config.storage.data_file.display(),
        export_dir = %config.storage.export_dir.display(),
        "Starting"
    );

    let repository: Arc<dyn ScheduleRepository> =
        Arc::new(JsonFileScheduleRepository::new(&config.storage.data_file));
    let export_storage: Arc<dyn ExportFileStorage> =
        Arc::new(LocalExportStorage::new(&config.storage.export_dir));
    let dialogs: Arc<dyn DialogStateStore> = Arc::new(InMemoryDialogStateStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let chat = ChatHandler::new(
        repository.clone(),
        export_storage.clone(),
        dialogs,
        clock.clone(),
    );
    let app = app_router(
        ChatHandlers::new(Arc::new(chat)),
        ScheduleHandlers::from_ports(repository, export_storage, clock),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
