//! Wiring of one client instance: config, HTTP adapter, stores.

use std::sync::Arc;

use crate::api::{ApiClient, AuthContext};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::guard::{resolve, Guard, Route};
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::{ListStore, SessionStore, Students, Teachers};

/// Totals shown on the landing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub welcome_name: String,
    pub student_total: u64,
    pub teacher_total: u64,
}

/// All stores of one client, sharing a single [`ApiClient`] and therefore a
/// single [`AuthContext`].
pub struct RosterApp {
    config: Config,
    session: SessionStore,
    students: ListStore<Students>,
    teachers: ListStore<Teachers>,
}

impl RosterApp {
    /// Build with file-backed storage at `config.storage_path()`.
    pub fn from_config(config: Config) -> Result<Self> {
        let storage = Arc::new(FileStorage::new(config.storage_path()));
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: Config, storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
        config.validate()?;
        let client = ApiClient::from_config(&config, AuthContext::new())?;
        Ok(Self {
            session: SessionStore::new(client.clone(), storage),
            students: ListStore::new(client.clone()),
            teachers: ListStore::new(client),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn page_size(&self) -> u32 {
        self.config.pagination.page_size
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn students(&self) -> &ListStore<Students> {
        &self.students
    }

    pub fn teachers(&self) -> &ListStore<Teachers> {
        &self.teachers
    }

    pub fn resolve(&self, route: Route) -> Guard {
        resolve(route, self.session.current().as_ref())
    }

    /// Load the first page of both lists concurrently and report totals.
    ///
    /// # Errors
    /// [`Error::Auth`] without a session; otherwise the first failed load.
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        let Some(session) = self.session.current() else {
            return Err(Error::Auth {
                message: "Please log in first".to_string(),
            });
        };

        let size = self.page_size();
        let (students, teachers) =
            tokio::join!(self.students.load(0, size), self.teachers.load(0, size));
        students?;
        teachers?;

        Ok(DashboardSummary {
            welcome_name: session.identity.first_name,
            student_total: self.students.state().collection.total_count,
            teacher_total: self.teachers.state().collection.total_count,
        })
    }
}
