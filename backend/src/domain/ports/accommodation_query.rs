//! Driving port for reading accommodation listings.

use async_trait::async_trait;

use crate::domain::{AccId, Accommodation, Error, TripWindow};

/// Read side of the accommodation service.
///
/// Lookups that find nothing are not errors: `find` answers `None` and the
/// list operations answer an empty vector.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccommodationQuery: Send + Sync {
    /// Every listing, ordered by id.
    async fn list(&self) -> Result<Vec<Accommodation>, Error>;

    /// Listings whose availability window covers the whole trip.
    async fn search_by_period(&self, trip: TripWindow) -> Result<Vec<Accommodation>, Error>;

    /// One listing by id.
    async fn find(&self, acc_id: AccId) -> Result<Option<Accommodation>, Error>;
}
