use std::env::vars;
use std::fmt::Display;

use serde::Deserialize;
use tracing::info;
use userdesk_utils::version_info::RuntimeEnv;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "nightly")]
    Nightly,
    #[serde(rename = "prod")]
    Prod,
}

impl From<Env> for RuntimeEnv {
    fn from(env: Env) -> Self {
        match env {
            Env::Local => Self::Local,
            Env::Test => Self::Test,
            Env::Nightly => Self::Nightly,
            Env::Prod => Self::Prod,
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(RuntimeEnv::from(*self).as_str())
    }
}

/// Validated service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
}

// Environment variables as read; defaults are applied in `Config::from_raw`.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    server_addr: Option<String>,
    port: Option<u16>,
}

impl Config {
    /// Local configuration for unit and integration tests.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Local,
            server_addr: "127.0.0.1".to_owned(),
            port: DEFAULT_PORT,
        }
    }

    pub fn new_for_test_with_env(env: Env) -> Self {
        Self {
            env,
            ..Self::new_for_test()
        }
    }

    pub fn environment(&self) -> Env {
        self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    /// Reads `ENV`, `SERVER_ADDR` and `PORT`.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            env,
            server_addr,
            port,
        } = raw;

        let server_addr = server_addr.unwrap_or_else(|| {
            let default_addr = match env {
                Env::Local => "127.0.0.1",
                _ => "0.0.0.0",
            };
            info!("SERVER_ADDR not set, defaulting to {default_addr} for {env} environment");
            default_addr.to_owned()
        });

        let port = port.unwrap_or_else(|| {
            info!("PORT not set, defaulting to {DEFAULT_PORT}");
            DEFAULT_PORT
        });

        Self {
            env,
            server_addr,
            port,
        }
    }
}
