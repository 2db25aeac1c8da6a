//! PostgreSQL persistence adapters.
//!
//! Adapters translate between Diesel rows (`models`) and domain types; no
//! business rules live here. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! ```ignore
//! use lodging_backend::outbound::persistence::{
//!     DbPool, DieselAccommodationRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/lodging")).await?;
//! let repository = DieselAccommodationRepository::new(pool);
//! ```

mod diesel_accommodation_repository;
mod diesel_image_catalogue;
mod diesel_sequence_allocator;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_accommodation_repository::DieselAccommodationRepository;
pub use diesel_image_catalogue::DieselImageCatalogue;
pub use diesel_sequence_allocator::DieselSequenceAllocator;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
