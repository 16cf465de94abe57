//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use backend::domain::RecordHolder;
use backend::domain::ports::{FixtureUserLookup, UserLookup};
use backend::outbound::memory::{InMemoryUserLookup, load_users_file};
use backend::settings::AppSettings;

/// Everything the server needs to start.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) record: RecordHolder,
    pub(crate) users: Arc<dyn UserLookup>,
}

impl ServerConfig {
    /// Configuration with an explicit record and no users.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, record: RecordHolder) -> Self {
        Self {
            bind_addr,
            record,
            users: Arc::new(FixtureUserLookup),
        }
    }

    /// Replace the user lookup adapter.
    #[must_use]
    pub fn with_users(mut self, users: Arc<dyn UserLookup>) -> Self {
        self.users = users;
        self
    }

    /// Build configuration from loaded settings, reading the users file when
    /// one is configured.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the users file cannot be read or parsed.
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        let record = RecordHolder::new(settings.record_id(), settings.record_name());
        let config = Self::new(settings.bind_addr(), record);
        let Some(path) = settings.users_file() else {
            return Ok(config);
        };
        let users = load_users_file(path).map_err(std::io::Error::other)?;
        let lookup: InMemoryUserLookup = users.into_iter().collect();
        info!(path = %path.display(), user_count = lookup.len(), "loaded users file");
        Ok(config.with_users(Arc::new(lookup)))
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
