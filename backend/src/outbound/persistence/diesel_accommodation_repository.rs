//! PostgreSQL-backed [`AccommodationRepository`].

use std::collections::HashSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccommodationRepository, AccommodationRepositoryError};
use crate::domain::{AccId, Accommodation, TripWindow};

use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{AccommodationContent, AccommodationRow, NewAccommodationRow};
use super::pool::{DbPool, PoolError};
use super::schema::accommodations;

/// Diesel adapter for the `accommodations` table.
#[derive(Clone)]
pub struct DieselAccommodationRepository {
    pool: DbPool,
}

impl DieselAccommodationRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> AccommodationRepositoryError {
    map_pool_error(error, AccommodationRepositoryError::connection)
}

fn diesel_error(
    operation: &'static str,
) -> impl FnOnce(diesel::result::Error) -> AccommodationRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            AccommodationRepositoryError::query,
            AccommodationRepositoryError::connection,
        )
    }
}

fn into_domain(rows: Vec<AccommodationRow>) -> Result<Vec<Accommodation>, AccommodationRepositoryError> {
    rows.into_iter().map(Accommodation::try_from).collect()
}

#[async_trait]
impl AccommodationRepository for DieselAccommodationRepository {
    async fn list_all(&self) -> Result<Vec<Accommodation>, AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = accommodations::table
            .select(AccommodationRow::as_select())
            .order(accommodations::acc_id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error("list accommodations"))?;
        into_domain(rows)
    }

    async fn find_available(
        &self,
        trip: &TripWindow,
    ) -> Result<Vec<Accommodation>, AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = accommodations::table
            .filter(accommodations::open_at.le(trip.trip_start))
            .filter(accommodations::close_at.ge(trip.trip_end))
            .select(AccommodationRow::as_select())
            .order(accommodations::acc_id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error("search accommodations"))?;
        into_domain(rows)
    }

    async fn find_by_id(
        &self,
        acc_id: AccId,
    ) -> Result<Option<Accommodation>, AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = accommodations::table
            .find(acc_id.get())
            .select(AccommodationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find accommodation"))?;
        row.map(Accommodation::try_from).transpose()
    }

    async fn insert(
        &self,
        accommodation: &Accommodation,
    ) -> Result<(), AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::insert_into(accommodations::table)
            .values(NewAccommodationRow::from(accommodation))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|error| {
                if is_unique_violation(&error) {
                    AccommodationRepositoryError::duplicate_id(accommodation.acc_id().get())
                } else {
                    diesel_error("insert accommodation")(error)
                }
            })
    }

    async fn replace(
        &self,
        accommodation: &Accommodation,
    ) -> Result<bool, AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let updated = diesel::update(accommodations::table.find(accommodation.acc_id().get()))
            .set((
                AccommodationContent::from(accommodation.details()),
                accommodations::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map_err(diesel_error("replace accommodation"))?;
        Ok(updated > 0)
    }

    async fn delete(&self, acc_id: AccId) -> Result<bool, AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(accommodations::table.find(acc_id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error("delete accommodation"))?;
        Ok(deleted > 0)
    }

    async fn photos_in_use(
        &self,
        urls: &[String],
        excluding: AccId,
    ) -> Result<Vec<String>, AccommodationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let galleries: Vec<Vec<String>> = accommodations::table
            .filter(accommodations::acc_id.ne(excluding.get()))
            .filter(accommodations::photos.overlaps_with(urls))
            .select(accommodations::photos)
            .load(&mut conn)
            .await
            .map_err(diesel_error("find shared photos"))?;
        let shown: HashSet<String> = galleries.into_iter().flatten().collect();
        Ok(urls.iter().filter(|url| shown.contains(*url)).cloned().collect())
    }
}
