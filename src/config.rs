use crate::error::{BookshelfError, Result};
use crate::model::EntityId;
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    /// Resolve `host:port` to the first matching socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                BookshelfError::Config(format!(
                    "Invalid address {}:{}: {}",
                    self.host, self.port, e
                ))
            })?
            .next()
            .ok_or_else(|| {
                BookshelfError::Config(format!(
                    "Address {}:{} did not resolve",
                    self.host, self.port
                ))
            })
    }
}

/// Data loaded into the store at startup.
///
/// Ids are not part of the seed: entries are numbered in file order, the
/// same way mutations number new entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSettings {
    #[serde(default)]
    pub authors: Vec<SeedAuthor>,

    #[serde(default)]
    pub books: Vec<SeedBook>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBook {
    pub name: String,
    pub author_id: EntityId,
}

impl SeedSettings {
    /// The sample library served when no seed is configured.
    pub fn sample() -> Self {
        let authors = ["J. K. Rowling", "J. R. R. Tolkien", "Brent Weeks"]
            .into_iter()
            .map(|name| SeedAuthor {
                name: name.to_string(),
            })
            .collect();

        let books = [
            ("Harry Potter and the Chamber of Secrets", 1),
            ("Harry Potter and the Prisoner of Azkaban", 1),
            ("Harry Potter and the Goblet of Fire", 1),
            ("The Fellowship of the Ring", 2),
            ("The Two Towers", 2),
            ("The Return of the King", 2),
            ("The Way of Shadows", 3),
            ("Beyond the Shadows", 3),
        ]
        .into_iter()
        .map(|(name, author_id)| SeedBook {
            name: name.to_string(),
            author_id,
        })
        .collect();

        Self { authors, books }
    }
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self::sample()
    }
}

impl BookshelfConfig {
    /// Load configuration from an explicit path, or search upward from
    /// `start_path` for `.bookshelf.yml`. No file at all means defaults.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::find_config_file(start_path) {
                Some(path) => path,
                None => {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %config_path.display(), "Loading configuration");
        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            BookshelfError::Config(format!("Cannot read {}: {}", config_path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to null; treat it as "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
