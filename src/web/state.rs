//! Shared state for the web server.

use std::sync::Arc;

use crate::config::Config;
use crate::storage::{FileStore, MemberStore};
use crate::web::pages::Pages;
use crate::web::session::SessionStore;

/// Everything a request handler needs, cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub members: Arc<MemberStore>,
    pub files: Arc<FileStore>,
    pub pages: Arc<Pages>,
}

impl AppState {
    /// Wire up stores from configuration. Creates the uploads
    /// directory and runs database migrations.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let members = MemberStore::open(config.database_path())?;
        let files = FileStore::new(config.uploads_path())?;

        Ok(Self {
            sessions: SessionStore::new(&config.server.secret_key),
            members: Arc::new(members),
            files: Arc::new(files),
            pages: Arc::new(Pages::new()?),
        })
    }
}
