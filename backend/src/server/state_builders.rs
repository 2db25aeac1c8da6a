//! Builders that pick storage and cleanup adapters for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;
use url::Url;

use lodging_backend::domain::AccommodationService;
use lodging_backend::domain::ports::{
    AccommodationRepository, FixtureLoginService, NoOpPhotoCleanup, PhotoCleanup,
    SequenceAllocator,
};
use lodging_backend::inbound::http::state::HttpState;
use lodging_backend::outbound::memory::{InMemoryAccommodationRepository, InMemorySequenceAllocator};
use lodging_backend::outbound::persistence::{
    DbPool, DieselAccommodationRepository, DieselImageCatalogue, DieselSequenceAllocator,
};
use lodging_backend::outbound::photo_store::ObjectStorePhotoCleanup;

use super::ServerConfig;

type StoragePair = (Arc<dyn AccommodationRepository>, Arc<dyn SequenceAllocator>);

fn build_storage(pool: Option<&DbPool>) -> StoragePair {
    match pool {
        Some(pool) => (
            Arc::new(DieselAccommodationRepository::new(pool.clone())),
            Arc::new(DieselSequenceAllocator::new(pool.clone())),
        ),
        None => {
            info!("no database configured; listings are kept in memory");
            (
                Arc::new(InMemoryAccommodationRepository::new()),
                Arc::new(InMemorySequenceAllocator::new()),
            )
        }
    }
}

fn build_photo_cleanup(
    pool: Option<&DbPool>,
    photo_store_url: Option<&Url>,
) -> std::io::Result<Arc<dyn PhotoCleanup>> {
    let Some(url) = photo_store_url else {
        return Ok(Arc::new(NoOpPhotoCleanup));
    };
    let catalogue = pool.cloned().map(DieselImageCatalogue::new);
    let cleanup = ObjectStorePhotoCleanup::new(url.clone(), catalogue)
        .map_err(|err| std::io::Error::other(format!("photo store client: {err}")))?;
    Ok(Arc::new(cleanup))
}

/// Build the shared HTTP state from the configured adapters.
///
/// # Errors
///
/// Fails when the object store client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let pool = config.db_pool.as_ref();
    let (repository, allocator) = build_storage(pool);
    let cleanup = build_photo_cleanup(pool, config.photo_store_url.as_ref())?;
    let service = Arc::new(AccommodationService::new(repository, allocator, cleanup));

    Ok(web::Data::new(HttpState::new(
        Arc::new(FixtureLoginService),
        service.clone(),
        service,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use lodging_backend::domain::ports::{CreateAccommodationRequest, FIXTURE_USER_ID};
    use lodging_backend::domain::{AccommodationDraft, UserId};
    use serde_json::json;

    fn config() -> ServerConfig {
        ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("socket addr"),
        )
    }

    fn draft() -> AccommodationDraft {
        AccommodationDraft {
            photos: Some(vec!["https://cdn.example.com/a.jpg".to_owned()]),
            name: Some("Hanok stay".to_owned()),
            open_at: "2024-01-01".parse().ok(),
            close_at: "2024-12-31".parse().ok(),
            address: Some("Seoul".to_owned()),
            hanmadi: Some("Quiet".to_owned()),
            surroundings: Some("Palace".to_owned()),
            notice: Some("No pets".to_owned()),
            basics: Some("2 rooms".to_owned()),
            facilities: Some(json!({ "wifi": true })),
            charge: Some(json!(90_000)),
        }
    }

    #[tokio::test]
    async fn without_pool_uses_in_memory_storage() {
        let state = build_http_state(&config()).expect("state");
        let owner = UserId::new(FIXTURE_USER_ID).expect("user id");

        let created = state
            .accommodations
            .create(CreateAccommodationRequest {
                owner,
                draft: draft(),
            })
            .await
            .expect("create");
        assert_eq!(created.acc_id.get(), 1);

        let listed = state.accommodations_query.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_owned_by(&owner));
    }

    #[test]
    fn photo_store_url_selects_object_store_cleanup() {
        let url = Url::parse("http://127.0.0.1:9000/photos").expect("url");
        let cleanup = build_photo_cleanup(None, Some(&url));
        assert!(cleanup.is_ok());
    }
}
