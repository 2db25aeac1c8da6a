//! HTTP inbound adapter exposing the REST endpoints.

pub mod accommodations;
pub mod accommodations_dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
pub mod test_utils;
pub mod users;

use actix_web::web;

/// Register every session-aware API route on the `/api` scope.
///
/// The caller wraps the scope in session middleware and supplies
/// [`state::HttpState`] as app data.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(users::login).configure(accommodations::configure);
}
