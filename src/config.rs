use std::{
    net::{SocketAddr, ToSocketAddrs},
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or(anyhow!("Couldn't resolve {}:{}", self.host, self.port))
    }

    /// A port given on the command line wins over every other source.
    pub fn override_port(&mut self, arg: Option<String>) -> Result<()> {
        if let Some(port) = arg {
            self.port = port.parse().context("Port argument is not a valid port")?;
        }
        Ok(())
    }
}

/// Defaults, then `activity-signup.toml` if present, then `APP_*` variables.
pub fn load() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 8000)?
        .add_source(config::File::with_name("activity-signup").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Config>()
}
