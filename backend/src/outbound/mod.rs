//! Outbound adapters implementing the driven ports.
//!
//! - `persistence`: PostgreSQL via Diesel.
//! - `memory`: in-process stores for database-less runs and tests.
//! - `photo_store`: HTTP object-store photo cleanup.

pub mod memory;
pub mod persistence;
pub mod photo_store;
