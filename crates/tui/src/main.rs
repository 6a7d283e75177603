mod app;
mod bootstrap;
mod client;
mod commands;
mod config;
mod error;
mod format;
mod sync;
mod ui;
mod view;

#[cfg(test)]
mod testing;

use std::{fs::OpenOptions, sync::Mutex};

use crate::error::{AppError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}

/// Logs go to a file: the terminal belongs to the UI while it runs.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tui={level},api_types={level}",
            level = config.log_level
        ))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::info!("expense_tui starting, backend {}", config.base_url);
    Ok(())
}
