//! Handlers behind the `url-pointers` admin commands.
//!
//! Output goes to a caller-supplied writer so the handlers can be
//! exercised without a terminal.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Map;

use pointers_auth::{
    AuthFramework, Authenticator, IdentityStore, MemoryIdentityStore, assemble,
    deserialize_identity, serialize_identity,
};
use pointers_auth_google::google_strategy_standalone;
use pointers_config::{ConfigSchema, Environment, LogFacade, ServerConfig, StandaloneConfig};

use crate::default_registry;

/// Which configuration surface to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Server deployment, providers selected by `AUTH_PROVIDERS`.
    Server,
    /// Single-process deployment.
    Standalone,
}

/// Load a configuration record.
///
/// With a path, the file is read and overlaid with `env`; without one, the
/// record is built from `env` alone.
pub fn load<C: ConfigSchema>(path: Option<&Path>, env: &Environment) -> pointers_config::Result<C> {
    match path {
        Some(path) => C::from_file(path, env, &LogFacade),
        None => C::validate(&Map::new(), env),
    }
}

/// Validate the configuration and report what it enables.
///
/// The configured providers are assembled against an in-process
/// [`Authenticator`], so provider-level failures (a missing Google
/// credential, say) surface here rather than at startup. Standalone
/// deployments always get the Google provider, called back on `redirectUrl`.
pub fn cmd_check(
    mode: Mode,
    path: Option<&Path>,
    env: &Environment,
    out: &mut dyn Write,
) -> Result<()> {
    match mode {
        Mode::Server => {
            let config: ServerConfig = load(path, env)?;
            let store: Arc<dyn IdentityStore> = Arc::new(MemoryIdentityStore::new());
            let mut framework = Authenticator::new();
            assemble(&mut framework, store, &config, &default_registry())
                .context("failed to assemble auth providers")?;

            writeln!(out, "configuration OK (server)")?;
            writeln!(out, "listening port: {}", config.port)?;
            writeln!(out, "providers: {}", framework.strategy_names().join(", "))?;
        }
        Mode::Standalone => {
            let config: StandaloneConfig = load(path, env)?;
            let store: Arc<dyn IdentityStore> = Arc::new(MemoryIdentityStore::new());
            let mut framework = Authenticator::new();
            framework.serialize_user(serialize_identity(store.clone()));
            framework.deserialize_user(deserialize_identity(store.clone()));
            framework.use_strategy(Arc::new(google_strategy_standalone(store, &config)));

            writeln!(out, "configuration OK (standalone)")?;
            writeln!(out, "listening port: {}", config.port)?;
            writeln!(out, "redirect url: {}", config.redirect_url)?;
            writeln!(out, "providers: {}", framework.strategy_names().join(", "))?;
        }
    }
    Ok(())
}

/// Print the validated configuration as `URL_POINTERS_*` variables.
///
/// With `docker_env`, each line is rendered as a `docker run` flag.
pub fn cmd_export(
    mode: Mode,
    path: Option<&Path>,
    env: &Environment,
    docker_env: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let vars = match mode {
        Mode::Server => load::<ServerConfig>(path, env)?.to_env_vars()?,
        Mode::Standalone => load::<StandaloneConfig>(path, env)?.to_env_vars()?,
    };
    write_env_vars(&vars, docker_env, out)
}

fn write_env_vars(vars: &[(String, String)], docker_env: bool, out: &mut dyn Write) -> Result<()> {
    for (key, value) in vars {
        if docker_env {
            writeln!(out, "--env {key}={value}")?;
        } else {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
