//! Item Registrar Binary
//!
//! Logs in the configured account, registers the configured item with the
//! simulated dealer, and streams its ticks until Ctrl+C.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;

use item_registrar::RegisterItemRequestDto;
use item_registrar::config::{Config, DEFAULT_CONFIG_PATH, load_config, load_dotenv};
use item_registrar::infrastructure::config::Container;
use item_registrar::infrastructure::dealer::SimulatedDealerClient;
use item_registrar::infrastructure::handlers::BroadcastTickHandler;
use item_registrar::infrastructure::logging::TracingLogger;
use item_registrar::infrastructure::presenter::JsonRegisterItemPresenter;
use item_registrar::infrastructure::session::InMemorySessionManager;
use item_registrar::telemetry::init_tracing;

/// Environment variable naming the config file.
const CONFIG_PATH_ENV: &str = "ITEM_REGISTRAR_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_dotenv();

    let config = read_config()?;
    init_tracing(&config.observability.logging);

    match env_file {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        None => tracing::debug!("No .env file found, using process environment"),
    }

    tracing::info!(
        account = %config.session.account,
        item_code = %config.registration.item_code,
        "Starting item registrar"
    );

    let dealer = Arc::new(SimulatedDealerClient::with_codes(
        config.dealer.catalog.iter().map(String::as_str),
    ));
    let sessions = Arc::new(InMemorySessionManager::new());
    sessions.login(config.session.account.as_str());

    let tick_handler = Arc::new(BroadcastTickHandler::new());
    let mut tick_rx = tick_handler.subscribe();

    let container = Container::new(
        sessions,
        Arc::clone(&dealer),
        Arc::new(JsonRegisterItemPresenter),
        Arc::new(TracingLogger),
        tick_handler,
    );
    let register_item = container.register_item_use_case();

    let output = register_item
        .execute(RegisterItemRequestDto::new(
            config.session.account.as_str(),
            config.registration.item_code.as_str(),
        ))
        .await
        .context("registration failed")?;
    println!("{output}");

    let shutdown = CancellationToken::new();
    let feed = dealer.start_feed(config.dealer.tick_interval(), shutdown.clone());

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for Ctrl+C")?;
                tracing::info!("Received Ctrl+C, shutting down");
                break;
            }
            tick = tick_rx.recv() => match tick {
                Ok(tick) => tracing::info!(
                    item_code = %tick.item_code,
                    price = %tick.price,
                    volume = tick.volume,
                    "Tick"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Tick receiver lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    shutdown.cancel();
    if let Err(e) = feed.await {
        tracing::warn!(error = %e, "Tick feed task failed");
    }
    register_item.release_subscription();

    tracing::info!("Item registrar stopped");
    Ok(())
}

/// Load the config file, falling back to built-in defaults when it is absent.
fn read_config() -> anyhow::Result<Config> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    match load_config(Some(&path)) {
        Ok(config) => Ok(config),
        Err(e) if e.is_not_found() => {
            eprintln!("Config file '{path}' not found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e).context("failed to load configuration"),
    }
}
