use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_RECORDS_FILE: &str = "./todos.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub records_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `TODO_BIND_ADDR` wins over `PORT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = match lookup("TODO_BIND_ADDR") {
            Some(addr) => addr
                .parse::<SocketAddr>()
                .context("TODO_BIND_ADDR must be a valid host:port")?,
            None => {
                let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
                format!("127.0.0.1:{port}")
                    .parse::<SocketAddr>()
                    .context("PORT must be a valid port number")?
            }
        };

        let records_file = PathBuf::from(
            lookup("TODO_RECORDS_FILE").unwrap_or_else(|| DEFAULT_RECORDS_FILE.to_string()),
        );

        Ok(Self {
            bind_addr,
            records_file,
        })
    }
}
