//! Driven port for accommodation persistence.

use async_trait::async_trait;

use crate::domain::{AccId, Accommodation, TripWindow};

use super::define_port_error;

define_port_error! {
    /// Errors raised by accommodation repository adapters.
    pub enum AccommodationRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "accommodation repository connection failed: {message}",
        /// A query or mutation failed.
        Query { message: String } =>
            "accommodation repository query failed: {message}",
        /// Insert collided with an existing identifier.
        DuplicateId { acc_id: i64 } =>
            "accommodation {acc_id} already exists",
    }
}

/// Storage contract for accommodation records.
///
/// Every lookup by id returns `Option`; callers branch on absence before
/// touching the record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccommodationRepository: Send + Sync {
    /// All records ordered by id.
    async fn list_all(&self) -> Result<Vec<Accommodation>, AccommodationRepositoryError>;

    /// Records whose availability window contains `trip`, ordered by id.
    async fn find_available(
        &self,
        trip: &TripWindow,
    ) -> Result<Vec<Accommodation>, AccommodationRepositoryError>;

    /// Single record, or `None`.
    async fn find_by_id(
        &self,
        acc_id: AccId,
    ) -> Result<Option<Accommodation>, AccommodationRepositoryError>;

    /// Insert a new record.
    async fn insert(&self, accommodation: &Accommodation)
        -> Result<(), AccommodationRepositoryError>;

    /// Overwrite every field of an existing record. Returns `false` when no
    /// row matched.
    async fn replace(
        &self,
        accommodation: &Accommodation,
    ) -> Result<bool, AccommodationRepositoryError>;

    /// Remove a record. Returns `false` when no row matched.
    async fn delete(&self, acc_id: AccId) -> Result<bool, AccommodationRepositoryError>;

    /// The members of `urls` that a listing other than `excluding` still
    /// shows. Order is unspecified.
    async fn photos_in_use(
        &self,
        urls: &[String],
        excluding: AccId,
    ) -> Result<Vec<String>, AccommodationRepositoryError>;
}
