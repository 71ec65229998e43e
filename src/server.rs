use crate::config::Config;
use crate::core_auth::{Authenticator, PasswdAuthenticator};
use crate::core_ftpcommand::initialize_command_handlers;
use crate::core_network::network::{self, SessionSetup};
use crate::core_network::Dispatcher;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Runs the FTP server with the provided configuration.
///
/// Resolves the virtual root, loads credentials and the greeting, builds the
/// command registry once, then accepts connections until the process stops.
pub async fn run(config: Config) -> Result<()> {
    info!("Starting server with config: {:?}", config);

    let setup = Arc::new(build_session_setup(&config)?);
    info!("Virtual root: {:?}", setup.virtual_root);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    if let Err(e) = network::start_server(listener, setup).await {
        error!("Server stopped: {}", e);
        return Err(e);
    }
    Ok(())
}

pub fn build_session_setup(config: &Config) -> Result<SessionSetup> {
    Ok(SessionSetup {
        virtual_root: resolve_virtual_root(config)?,
        greeting: load_greeting(config)?,
        authenticator: build_authenticator(config)?,
        dispatcher: Dispatcher::new(Arc::new(initialize_command_handlers())),
    })
}

/// `chroot_dir` joined with `min_homedir`, created when missing and
/// canonicalized.
pub fn resolve_virtual_root(config: &Config) -> Result<PathBuf> {
    let base_path = PathBuf::from(&config.server.chroot_dir)
        .join(config.server.min_homedir.trim_start_matches('/'));

    fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create virtual root: {:?}", base_path))?;
    base_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve virtual root: {:?}", base_path))
}

/// The 220 reply, prefixed by the banner file's lines when one is configured.
pub fn load_greeting(config: &Config) -> Result<String> {
    let mut greeting = String::new();

    if let Some(path) = &config.server.banner_file {
        let banner = fs::read_to_string(path)
            .with_context(|| format!("Failed to read banner file: {}", path))?;
        for line in banner.lines() {
            greeting.push_str(&format!("220-{}\n", line.trim_end()));
        }
    }

    greeting.push_str(&format!("220 {}", config.server.greeting));
    Ok(greeting)
}

pub fn build_authenticator(config: &Config) -> Result<Arc<dyn Authenticator>> {
    let authenticator = match &config.server.passwd_file {
        Some(path) => PasswdAuthenticator::from_file(path, config.server.allow_anonymous)?,
        None => {
            if !config.server.allow_anonymous {
                warn!("No passwd_file configured and anonymous logins disabled; nobody can log in");
            }
            PasswdAuthenticator::new(Default::default(), config.server.allow_anonymous)
        }
    };
    Ok(Arc::new(authenticator))
}
