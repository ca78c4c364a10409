//! Common CLI utility functions shared across commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use leaderboard_core::{
    ClientConfig, FileStore, HttpTransport, IdentityStore, LeaderboardClient,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cli::Args;

pub type Client = LeaderboardClient<HttpTransport>;

/// Resolve settings: config file (or defaults) < environment < flags.
pub fn resolve_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    config.apply_env();

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(app_id) = &args.app_id {
        config.app_id = app_id.clone();
    }
    if let Some(api_token) = &args.api_token {
        config.api_token = api_token.clone();
    }

    config.validate()?;
    debug!("Using {:?}", config);
    Ok(config)
}

/// Open the identity store at `path`, or at the platform default.
pub fn open_identity(path: Option<&Path>) -> Result<Arc<IdentityStore>> {
    let store = match path {
        Some(path) => FileStore::new(path),
        None => FileStore::default_location()?,
    };
    info!("Identity store: {}", store.path().display());
    Ok(Arc::new(IdentityStore::new(Arc::new(store))))
}

pub fn build_client(args: &Args, identity: Arc<IdentityStore>) -> Result<Client> {
    let config = resolve_config(args)?;
    let transport = HttpTransport::new(config.timeout)?;
    Ok(LeaderboardClient::new(transport, config, identity))
}

/// Token that is cancelled on Ctrl-C.
pub fn cancel_on_ctrlc() -> Result<CancellationToken> {
    let cancel = CancellationToken::new();
    let cancel_ctrlc = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nCancelling...");
        cancel_ctrlc.cancel();
    })?;
    Ok(cancel)
}
