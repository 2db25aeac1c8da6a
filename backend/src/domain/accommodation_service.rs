//! Accommodation domain service.
//!
//! Implements both driving ports over the repository, allocator, and photo
//! cleanup driven ports. Ownership checks and validation live here so that
//! every inbound adapter gets the same rules.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccommodationCommand, AccommodationQuery, AccommodationRepository,
    AccommodationRepositoryError, CreateAccommodationRequest, CreateAccommodationResponse,
    DeleteAccommodationRequest, PhotoCleanup, SequenceAllocator, SequenceAllocatorError,
    UpdateAccommodationRequest,
};
use crate::domain::{
    ACCOMMODATION_COUNTER, AccId, Accommodation, AccommodationDetails, AccommodationDraft,
    AccommodationValidationError, Error, TripWindow, UserId,
};

/// Shown when a listing form is incomplete.
pub const MISSING_FIELDS_MESSAGE: &str = "작성란을 모두 입력해주세요.";
/// Shown when someone other than the owner edits a listing.
pub const NOT_OWNER_UPDATE_MESSAGE: &str = "등록자만 수정할 수 있습니다.";
/// Shown when someone other than the owner deletes a listing.
pub const NOT_OWNER_DELETE_MESSAGE: &str = "등록자만 삭제할 수 있습니다.";
/// Message for a missing listing on update or delete.
pub const NOT_FOUND_MESSAGE: &str = "accommodation not found";

/// Accommodation service implementing [`AccommodationQuery`] and
/// [`AccommodationCommand`].
pub struct AccommodationService<R: ?Sized, S: ?Sized, C: ?Sized> {
    repository: Arc<R>,
    allocator: Arc<S>,
    cleanup: Arc<C>,
}

impl<R: ?Sized, S: ?Sized, C: ?Sized> Clone for AccommodationService<R, S, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            allocator: Arc::clone(&self.allocator),
            cleanup: Arc::clone(&self.cleanup),
        }
    }
}

impl<R: ?Sized, S: ?Sized, C: ?Sized> AccommodationService<R, S, C> {
    /// Create a service over the given adapters.
    pub fn new(repository: Arc<R>, allocator: Arc<S>, cleanup: Arc<C>) -> Self {
        Self {
            repository,
            allocator,
            cleanup,
        }
    }
}

fn map_repository_error(error: AccommodationRepositoryError) -> Error {
    match error {
        AccommodationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("accommodation store unavailable: {message}"))
        }
        AccommodationRepositoryError::Query { message } => {
            Error::internal(format!("accommodation store error: {message}"))
        }
        AccommodationRepositoryError::DuplicateId { acc_id } => {
            Error::internal(format!("allocated accommodation id {acc_id} already in use"))
        }
    }
}

fn map_allocator_error(error: SequenceAllocatorError) -> Error {
    match error {
        SequenceAllocatorError::Connection { message } => {
            Error::service_unavailable(format!("id allocator unavailable: {message}"))
        }
        SequenceAllocatorError::Query { message } => {
            Error::internal(format!("id allocator error: {message}"))
        }
    }
}

fn map_validation_error(error: AccommodationValidationError) -> Error {
    match error {
        AccommodationValidationError::MissingFields(fields) => {
            Error::invalid_request(MISSING_FIELDS_MESSAGE)
                .with_details(json!({ "missingFields": fields }))
        }
        AccommodationValidationError::InvertedWindow { open_at, close_at } => {
            Error::invalid_request("openAt must not be after closeAt").with_details(json!({
                "openAt": open_at.to_string(),
                "closeAt": close_at.to_string(),
            }))
        }
    }
}

fn validate(draft: AccommodationDraft) -> Result<AccommodationDetails, Error> {
    draft.validate().map_err(map_validation_error)
}

impl<R, S, C> AccommodationService<R, S, C>
where
    R: AccommodationRepository + ?Sized,
    S: SequenceAllocator + ?Sized,
    C: PhotoCleanup + ?Sized,
{
    async fn load_owned(
        &self,
        acc_id: AccId,
        caller: &UserId,
        not_owner_message: &str,
    ) -> Result<Accommodation, Error> {
        let existing = self
            .repository
            .find_by_id(acc_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))?;
        if !existing.is_owned_by(caller) {
            return Err(Error::not_owner(not_owner_message));
        }
        Ok(existing)
    }

    /// Discard photos no other listing shows. A failed lookup keeps every
    /// photo.
    async fn discard_photos(&self, acc_id: AccId, mut urls: Vec<String>) {
        if urls.is_empty() {
            return;
        }
        match self.repository.photos_in_use(&urls, acc_id).await {
            Ok(shared) => urls.retain(|url| !shared.contains(url)),
            Err(err) => {
                warn!(%acc_id, error = %err, "photo usage lookup failed; keeping photos");
                return;
            }
        }
        if urls.is_empty() {
            debug!(%acc_id, "dropped photos are shared with other listings");
            return;
        }
        if let Err(err) = self.cleanup.discard(&urls).await {
            warn!(%acc_id, count = urls.len(), error = %err, "photo cleanup failed");
        }
    }
}

#[async_trait]
impl<R, S, C> AccommodationQuery for AccommodationService<R, S, C>
where
    R: AccommodationRepository + ?Sized,
    S: SequenceAllocator + ?Sized,
    C: PhotoCleanup + ?Sized,
{
    async fn list(&self) -> Result<Vec<Accommodation>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn search_by_period(&self, trip: TripWindow) -> Result<Vec<Accommodation>, Error> {
        self.repository
            .find_available(&trip)
            .await
            .map_err(map_repository_error)
    }

    async fn find(&self, acc_id: AccId) -> Result<Option<Accommodation>, Error> {
        self.repository
            .find_by_id(acc_id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R, S, C> AccommodationCommand for AccommodationService<R, S, C>
where
    R: AccommodationRepository + ?Sized,
    S: SequenceAllocator + ?Sized,
    C: PhotoCleanup + ?Sized,
{
    async fn create(
        &self,
        request: CreateAccommodationRequest,
    ) -> Result<CreateAccommodationResponse, Error> {
        let details = validate(request.draft)?;
        let raw = self
            .allocator
            .next_id(ACCOMMODATION_COUNTER)
            .await
            .map_err(map_allocator_error)?;
        let acc_id = AccId::new(raw)
            .map_err(|_| Error::internal(format!("allocator returned invalid id {raw}")))?;

        let accommodation = Accommodation::new(acc_id, request.owner, details);
        self.repository
            .insert(&accommodation)
            .await
            .map_err(map_repository_error)?;
        info!(%acc_id, owner = %request.owner, "accommodation created");
        Ok(CreateAccommodationResponse { acc_id })
    }

    async fn update(&self, request: UpdateAccommodationRequest) -> Result<(), Error> {
        let details = validate(request.draft)?;
        let existing = self
            .load_owned(request.acc_id, &request.caller, NOT_OWNER_UPDATE_MESSAGE)
            .await?;

        let dropped = existing.photos_dropped_by(&details);
        let replaced = self
            .repository
            .replace(&existing.replaced_with(details))
            .await
            .map_err(map_repository_error)?;
        if !replaced {
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }
        info!(acc_id = %request.acc_id, "accommodation updated");
        self.discard_photos(request.acc_id, dropped).await;
        Ok(())
    }

    async fn delete(&self, request: DeleteAccommodationRequest) -> Result<(), Error> {
        let existing = self
            .load_owned(request.acc_id, &request.caller, NOT_OWNER_DELETE_MESSAGE)
            .await?;

        let removed = self
            .repository
            .delete(request.acc_id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }
        info!(acc_id = %request.acc_id, "accommodation deleted");
        self.discard_photos(request.acc_id, existing.details().photos.clone())
            .await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "accommodation_service_tests.rs"]
mod tests;
