//! Startup wiring: config, logging, storage and the chat session.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use hearth_chat::{
    get_or_create_client_id, reset_client_id, HttpChatService, HttpServiceConfig, Pacing,
    Session, SessionOptions,
};
use hearth_common::HearthError;
use hearth_config::schema::{HearthConfig, LogLevel, PacingConfig};
use hearth_platform::JsonFileStore;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Crates whose logs follow the configured level. Everything else stays at warn.
const LOG_TARGETS: &[&str] = &[
    "hearth",
    "hearth_chat",
    "hearth_config",
    "hearth_platform",
];

/// Load the config file and apply command-line overrides on top.
pub fn load_config(args: &Args) -> Result<HearthConfig, HearthError> {
    let mut config = match args.config {
        Some(ref path) => hearth_config::load_config_from(path)?,
        None => hearth_config::load_config()?,
    };

    if let Some(ref url) = args.url {
        config.service.base_url = url.clone();
    }
    if let Some(ref path) = args.storage {
        config.storage.path = path.display().to_string();
    }

    // Overrides get the same checks as the file.
    hearth_config::validation::validate(&config)?;
    Ok(config)
}

/// Filter directive used when `RUST_LOG` is unset.
///
/// A bare level from `--log-level` is scoped to Hearth's crates; anything
/// containing `=` is taken as a complete filter.
pub fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    let level = match cli_level {
        Some(raw) if raw.contains('=') => return raw.to_string(),
        Some(raw) => raw,
        None => config_level.as_directive(),
    };

    let mut directive = String::from("warn");
    for target in LOG_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

/// Install the stderr subscriber. `RUST_LOG` wins over everything else.
pub fn init_logging(args: &Args, config: &HearthConfig) {
    let directive = log_directive(args.log_level.as_deref(), config.logging.level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();
}

/// Storage file location: `[storage].path` if set, else the platform default.
pub fn storage_path(config: &HearthConfig) -> Result<PathBuf, HearthError> {
    if config.storage.path.trim().is_empty() {
        Ok(hearth_platform::storage_file()?)
    } else {
        Ok(PathBuf::from(&config.storage.path))
    }
}

pub fn pacing(config: &PacingConfig) -> Pacing {
    Pacing {
        base_ms: u64::from(config.base_ms),
        per_char_ms: u64::from(config.per_char_ms),
        max_ms: u64::from(config.max_ms),
    }
}

pub fn session_options(config: &HearthConfig) -> SessionOptions {
    SessionOptions::default()
        .with_pacing(pacing(&config.pacing))
        .with_greeting(config.session.greeting.clone())
        .with_serialized_exchanges(config.session.serialize_exchanges)
}

pub fn build_service(config: &HearthConfig) -> Result<HttpChatService, HearthError> {
    let http_config = HttpServiceConfig::new(config.service.chat_url()).with_connect_timeout(
        Duration::from_secs(u64::from(config.service.connect_timeout_secs)),
    );
    HttpChatService::new(http_config).map_err(|e| HearthError::Network(e.to_string()))
}

/// Resolve the client identity and assemble a session ready to start.
pub fn build_session(args: &Args, config: &HearthConfig) -> Result<Session, HearthError> {
    let store = JsonFileStore::new(storage_path(config)?);
    tracing::debug!(path = %store.path().display(), "using storage file");

    if args.reset_identity {
        reset_client_id(&store)?;
        tracing::info!("Stored client id cleared");
    }
    let identity = get_or_create_client_id(&store)?;

    let service = build_service(config)?;
    tracing::info!(url = service.chat_url(), "Chat service configured");

    Ok(Session::new(
        identity,
        Arc::new(service),
        session_options(config),
    ))
}
