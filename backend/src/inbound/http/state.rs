//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be exercised with mocks or in-memory adapters.

use std::sync::Arc;

use crate::domain::ports::{AccommodationCommand, AccommodationQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check for `POST /api/login`.
    pub login: Arc<dyn LoginService>,
    /// Accommodation writes.
    pub accommodations: Arc<dyn AccommodationCommand>,
    /// Accommodation reads.
    pub accommodations_query: Arc<dyn AccommodationQuery>,
}

impl HttpState {
    /// Bundle the given ports.
    pub fn new(
        login: Arc<dyn LoginService>,
        accommodations: Arc<dyn AccommodationCommand>,
        accommodations_query: Arc<dyn AccommodationQuery>,
    ) -> Self {
        Self {
            login,
            accommodations,
            accommodations_query,
        }
    }
}
