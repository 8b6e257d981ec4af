use crate::error::ConfigError;
use crate::repo::{BlogRepository, JsonFileRepository, MemoryRepository};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

const ADDR_VAR: &str = "BLOG_ADDR";
const STORE_PATH_VAR: &str = "BLOG_STORE_PATH";
const BACKEND_VAR: &str = "BLOG_STORE_BACKEND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Json,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub store_path: PathBuf,
    pub backend: Backend,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| String::from(crate::blog::DEFAULT_ADDR));
        let addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr.clone(),
        })?;

        let store_path = lookup(STORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(crate::blog::DEFAULT_STORE_PATH));

        let backend = match lookup(BACKEND_VAR).as_deref() {
            None | Some("json") => Backend::Json,
            Some("memory") => Backend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidBackend {
                    var: BACKEND_VAR,
                    value: String::from(other),
                })
            }
        };

        Ok(Config {
            addr,
            store_path,
            backend,
        })
    }

    pub async fn open_repository(&self) -> Result<Arc<dyn BlogRepository>, ConfigError> {
        Ok(match self.backend {
            Backend::Json => Arc::new(JsonFileRepository::open(&self.store_path).await?),
            Backend::Memory => Arc::new(MemoryRepository::new()),
        })
    }
}
