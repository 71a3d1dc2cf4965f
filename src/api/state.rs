use std::sync::Arc;

use crate::{
    config::Config,
    service::{AttendanceReconciler, AttendanceViewBuilder, EmployeeDirectory},
    store::{AttendanceStore, EmployeeStore, StoreStatus},
};

/// Services shared by all handlers through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub reconciler: AttendanceReconciler,
    pub view_builder: AttendanceViewBuilder,
    pub directory: EmployeeDirectory,
    pub status: Arc<dyn StoreStatus>,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl AppState {
    /// Wire every service to one backing store.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: EmployeeStore + AttendanceStore + StoreStatus + 'static,
    {
        Self {
            reconciler: AttendanceReconciler::new(store.clone(), store.clone()),
            view_builder: AttendanceViewBuilder::new(store.clone(), store.clone()),
            directory: EmployeeDirectory::new(store.clone()),
            status: store,
            database_url_set: false,
            database_name_set: false,
        }
    }

    /// Record which database settings are configured, for the status probe.
    pub fn with_database_settings(mut self, config: &Config) -> Self {
        self.database_url_set = config.database_url.is_some();
        self.database_name_set = config.database_name().is_some();
        self
    }
}
