//! In-process adapters used when no database is configured, and by the
//! integration tests.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{
    AccommodationRepository, AccommodationRepositoryError, SequenceAllocator,
    SequenceAllocatorError,
};
use crate::domain::{AccId, Accommodation, TripWindow};

/// Accommodation store backed by an ordered map, so listings come out in id
/// order.
#[derive(Debug, Default)]
pub struct InMemoryAccommodationRepository {
    records: RwLock<BTreeMap<AccId, Accommodation>>,
}

impl InMemoryAccommodationRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccommodationRepository for InMemoryAccommodationRepository {
    async fn list_all(&self) -> Result<Vec<Accommodation>, AccommodationRepositoryError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.values().cloned().collect())
    }

    async fn find_available(
        &self,
        trip: &TripWindow,
    ) -> Result<Vec<Accommodation>, AccommodationRepositoryError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .values()
            .filter(|acc| acc.is_available_for(trip))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        acc_id: AccId,
    ) -> Result<Option<Accommodation>, AccommodationRepositoryError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&acc_id).cloned())
    }

    async fn insert(
        &self,
        accommodation: &Accommodation,
    ) -> Result<(), AccommodationRepositoryError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let acc_id = accommodation.acc_id();
        if records.contains_key(&acc_id) {
            return Err(AccommodationRepositoryError::duplicate_id(acc_id.get()));
        }
        records.insert(acc_id, accommodation.clone());
        Ok(())
    }

    async fn replace(
        &self,
        accommodation: &Accommodation,
    ) -> Result<bool, AccommodationRepositoryError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        match records.get_mut(&accommodation.acc_id()) {
            Some(slot) => {
                *slot = accommodation.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, acc_id: AccId) -> Result<bool, AccommodationRepositoryError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        Ok(records.remove(&acc_id).is_some())
    }

    async fn photos_in_use(
        &self,
        urls: &[String],
        excluding: AccId,
    ) -> Result<Vec<String>, AccommodationRepositoryError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let shown: HashSet<&String> = records
            .iter()
            .filter(|(acc_id, _)| **acc_id != excluding)
            .flat_map(|(_, acc)| &acc.details().photos)
            .collect();
        Ok(urls.iter().filter(|url| shown.contains(url)).cloned().collect())
    }
}

/// Counter map guarded by one mutex; increment and read happen under the
/// same lock.
#[derive(Debug, Default)]
pub struct InMemorySequenceAllocator {
    counters: Mutex<HashMap<String, i64>>,
}

impl InMemorySequenceAllocator {
    /// No counters yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceAllocator for InMemorySequenceAllocator {
    async fn next_id(&self, name: &str) -> Result<i64, SequenceAllocatorError> {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        let count = counters.entry(name.to_owned()).or_insert(0);
        *count += 1;
        Ok(*count)
    }
}
