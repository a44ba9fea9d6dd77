//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! services. Nothing in this crate reads process environment variables; the
//! binary reads them and hands the raw values to the `*_from_env_value`
//! helpers below, which keeps request handling and tests free of global state.

use crate::constants::{DEFAULT_REST_ADDR, DEFAULT_STORE_URL};
use crate::{ContentError, ContentResult};
use std::path::{Path, PathBuf};

/// Where content records are persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    /// Process memory; contents are lost on exit.
    Memory,
    /// A directory holding the JSON document collection.
    File(PathBuf),
}

impl StoreLocation {
    /// Parses a store connection string.
    ///
    /// Accepted forms:
    /// - `memory://`
    /// - `file://<dir>`
    /// - a bare directory path
    ///
    /// # Errors
    ///
    /// [`ContentError::InvalidInput`] for blank input, an empty `file://` path
    /// or an unsupported scheme.
    pub fn parse(value: &str) -> ContentResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ContentError::InvalidInput(
                "store url cannot be empty".into(),
            ));
        }

        if value == "memory://" || value == "memory" {
            return Ok(Self::Memory);
        }

        if let Some(path) = value.strip_prefix("file://") {
            if path.is_empty() {
                return Err(ContentError::InvalidInput(
                    "file:// store url must name a directory".into(),
                ));
            }
            return Ok(Self::File(PathBuf::from(path)));
        }

        if let Some((scheme, _)) = value.split_once("://") {
            return Err(ContentError::InvalidInput(format!(
                "unsupported store scheme '{scheme}' (expected memory:// or file://)"
            )));
        }

        Ok(Self::File(PathBuf::from(value)))
    }
}

impl std::fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreLocation::Memory => write!(f, "memory://"),
            StoreLocation::File(dir) => write!(f, "file://{}", dir.display()),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rest_addr: String,
    store: StoreLocation,
}

impl CoreConfig {
    pub fn new(rest_addr: String, store: StoreLocation) -> ContentResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(ContentError::InvalidInput(
                "rest address cannot be empty".into(),
            ));
        }
        Ok(Self { rest_addr, store })
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn store(&self) -> &StoreLocation {
        &self.store
    }

    /// The data directory, for file-backed stores.
    pub fn data_dir(&self) -> Option<&Path> {
        match &self.store {
            StoreLocation::File(dir) => Some(dir),
            StoreLocation::Memory => None,
        }
    }
}

/// Resolves the listen address from `NOTEBOOK_REST_ADDR` and `PORT` values.
///
/// An explicit address wins; otherwise a port binds on all interfaces;
/// otherwise [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_values(
    addr: Option<String>,
    port: Option<String>,
) -> ContentResult<String> {
    let non_blank = |v: Option<String>| v.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(addr) = non_blank(addr) {
        return Ok(addr);
    }
    if let Some(port) = non_blank(port) {
        let port: u16 = port
            .parse()
            .map_err(|_| ContentError::InvalidInput(format!("invalid PORT value '{port}'")))?;
        return Ok(format!("0.0.0.0:{port}"));
    }
    Ok(DEFAULT_REST_ADDR.to_string())
}

/// Resolves the store location from a `NOTEBOOK_STORE_URL` value.
///
/// `None` or blank falls back to [`DEFAULT_STORE_URL`].
pub fn store_location_from_env_value(value: Option<String>) -> ContentResult<StoreLocation> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => StoreLocation::parse(&v),
        None => StoreLocation::parse(DEFAULT_STORE_URL),
    }
}
