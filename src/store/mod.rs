//! Persistence ports for employees and attendance records.
//!
//! Services receive these as `Arc<dyn ...>` so the backing store (MySQL or
//! in-memory) is chosen at startup.

use async_trait::async_trait;
use chrono::NaiveDate;
use derive_more::Display;

use crate::model::{
    attendance::AttendanceRecord,
    employee::{Employee, UpsertOutcome},
};

pub mod memory;
pub mod mysql;
#[cfg(test)]
pub mod unavailable;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;
#[cfg(test)]
pub use unavailable::UnavailableStore;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "store connection failed: {}", _0)]
    Connection(String),
    #[display(fmt = "store query failed: {}", _0)]
    Query(String),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Connection(e.to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError>;

    /// Insert or merge by `id`; absent optional fields keep their stored value.
    async fn upsert(&self, employee: &Employee) -> Result<UpsertOutcome, StoreError>;

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn find_by_key(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    /// Replace the record keyed by `(employee_id, date)`, creating it if missing.
    async fn upsert(&self, record: &AttendanceRecord) -> Result<(), StoreError>;

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError>;
}

/// Connectivity probe used by the status endpoint.
#[async_trait]
pub trait StoreStatus: Send + Sync {
    /// Names of the collections (tables) the store holds.
    async fn collections(&self) -> Result<Vec<String>, StoreError>;
}
