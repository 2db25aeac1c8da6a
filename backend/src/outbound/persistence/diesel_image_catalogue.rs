//! Bookkeeping rows for uploaded photos.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::PhotoCleanupError;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::images;

/// Diesel adapter for the `images` table.
#[derive(Clone)]
pub struct DieselImageCatalogue {
    pool: DbPool,
}

impl DieselImageCatalogue {
    /// Create a catalogue over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Delete the rows for `urls`, returning how many existed.
    ///
    /// # Errors
    ///
    /// [`PhotoCleanupError::Catalogue`] on any pool or query failure.
    pub async fn forget(&self, urls: &[String]) -> Result<usize, PhotoCleanupError> {
        if urls.is_empty() {
            return Ok(0);
        }
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PhotoCleanupError::catalogue))?;
        diesel::delete(images::table.filter(images::image_url.eq_any(urls)))
            .execute(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(
                    err,
                    "forget images",
                    PhotoCleanupError::catalogue,
                    PhotoCleanupError::catalogue,
                )
            })
    }
}
