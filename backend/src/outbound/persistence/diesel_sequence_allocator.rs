//! PostgreSQL-backed [`SequenceAllocator`].
//!
//! Allocation is one upsert statement, so the row lock taken by
//! `ON CONFLICT DO UPDATE` serialises concurrent callers.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SequenceAllocator, SequenceAllocatorError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::counters;

/// Diesel adapter for the `counters` table.
#[derive(Clone)]
pub struct DieselSequenceAllocator {
    pool: DbPool,
}

impl DieselSequenceAllocator {
    /// Create an allocator over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceAllocator for DieselSequenceAllocator {
    async fn next_id(&self, name: &str) -> Result<i64, SequenceAllocatorError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, SequenceAllocatorError::connection))?;

        diesel::insert_into(counters::table)
            .values((counters::name.eq(name), counters::count.eq(1_i64)))
            .on_conflict(counters::name)
            .do_update()
            .set(counters::count.eq(counters::count + 1_i64))
            .returning(counters::count)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(
                    err,
                    "allocate sequence value",
                    SequenceAllocatorError::query,
                    SequenceAllocatorError::connection,
                )
            })
    }
}
