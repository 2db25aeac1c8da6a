//! Driving port for mutating accommodation listings.
//!
//! Every request carries the caller resolved by the inbound adapter. Drafts
//! are validated by the service so that adapters only shuttle raw input.

use async_trait::async_trait;

use crate::domain::{AccId, AccommodationDraft, Error, UserId};

/// Register a new listing on behalf of `owner`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccommodationRequest {
    /// The authenticated caller, recorded as owner.
    pub owner: UserId,
    /// Unvalidated listing input.
    pub draft: AccommodationDraft,
}

/// Outcome of a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateAccommodationResponse {
    /// Identifier minted for the new listing.
    pub acc_id: AccId,
}

/// Replace the content of an existing listing.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAccommodationRequest {
    /// Target listing.
    pub acc_id: AccId,
    /// The authenticated caller; must own the listing.
    pub caller: UserId,
    /// Unvalidated replacement content.
    pub draft: AccommodationDraft,
}

/// Remove a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAccommodationRequest {
    /// Target listing.
    pub acc_id: AccId,
    /// The authenticated caller; must own the listing.
    pub caller: UserId,
}

/// Write side of the accommodation service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccommodationCommand: Send + Sync {
    /// Validate, mint an id, and persist.
    ///
    /// # Errors
    ///
    /// `invalid_request` when the draft is incomplete or its window is
    /// inverted; no id is consumed in that case.
    async fn create(
        &self,
        request: CreateAccommodationRequest,
    ) -> Result<CreateAccommodationResponse, Error>;

    /// Validate and fully replace an owned listing.
    ///
    /// # Errors
    ///
    /// `invalid_request`, `not_found`, or `not_owner`.
    async fn update(&self, request: UpdateAccommodationRequest) -> Result<(), Error>;

    /// Remove an owned listing.
    ///
    /// # Errors
    ///
    /// `not_found` or `not_owner`.
    async fn delete(&self, request: DeleteAccommodationRequest) -> Result<(), Error>;
}
