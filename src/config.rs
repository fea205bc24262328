//! Dev host configuration from the environment.
//!
//! `PORT` picks the listen port (default 8080) and `LANDING_SITE_DIR` the
//! directory served at `/` (default `site`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_DIR: &str = "site";

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("site directory {0} does not exist")]
    MissingSiteDir(PathBuf),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub site_dir: PathBuf,
}

impl ServeConfig {
    /// Read `PORT` and `LANDING_SITE_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::InvalidPort`] when `PORT` is not a `u16`.
    pub fn from_env() -> Result<Self, ServeError> {
        Self::from_vars(std::env::var("PORT").ok(), std::env::var("LANDING_SITE_DIR").ok())
    }

    /// Build from raw variable values; `None` or blank means "use the default".
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::InvalidPort`] when `port` is set but not a `u16`.
    pub fn from_vars(port: Option<String>, site_dir: Option<String>) -> Result<Self, ServeError> {
        let port = match port.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|source| ServeError::InvalidPort { value: raw.to_owned(), source })?,
            None => DEFAULT_PORT,
        };
        let site_dir = site_dir
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        Ok(Self { port, site_dir })
    }

    /// Fail early if the site directory is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::MissingSiteDir`] when `site_dir` is not a directory.
    pub fn check_site_dir(&self) -> Result<(), ServeError> {
        if self.site_dir.is_dir() { Ok(()) } else { Err(ServeError::MissingSiteDir(self.site_dir.clone())) }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
