//! Ports at the hexagonal boundary.
//!
//! Driving ports ([`AccommodationQuery`], [`AccommodationCommand`],
//! [`LoginService`]) are called by inbound adapters. Driven ports
//! ([`AccommodationRepository`], [`SequenceAllocator`], [`PhotoCleanup`])
//! are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod accommodation_command;
mod accommodation_query;
mod accommodation_repository;
mod login_service;
mod photo_cleanup;
mod sequence_allocator;

#[cfg(test)]
pub use accommodation_command::MockAccommodationCommand;
pub use accommodation_command::{
    AccommodationCommand, CreateAccommodationRequest, CreateAccommodationResponse,
    DeleteAccommodationRequest, UpdateAccommodationRequest,
};
#[cfg(test)]
pub use accommodation_query::MockAccommodationQuery;
pub use accommodation_query::AccommodationQuery;
#[cfg(test)]
pub use accommodation_repository::MockAccommodationRepository;
pub use accommodation_repository::{AccommodationRepository, AccommodationRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_PASSWORD, FIXTURE_USER_ID, FIXTURE_USERNAME, FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use photo_cleanup::MockPhotoCleanup;
pub use photo_cleanup::{NoOpPhotoCleanup, PhotoCleanup, PhotoCleanupError};
#[cfg(test)]
pub use sequence_allocator::MockSequenceAllocator;
pub use sequence_allocator::{SequenceAllocator, SequenceAllocatorError};
