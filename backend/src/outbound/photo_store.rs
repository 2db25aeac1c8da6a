//! Object-store photo cleanup over HTTP.
//!
//! Each photo URL maps to an object key taken from its path; the adapter
//! issues `DELETE {endpoint}/{key}` and then forgets the matching `images`
//! rows. A 404 from the store counts as already deleted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::domain::ports::{PhotoCleanup, PhotoCleanupError};
use crate::outbound::persistence::DieselImageCatalogue;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("lodging-backend/", env!("CARGO_PKG_VERSION"));

/// Object key for a photo URL: its path without the leading slash.
///
/// ```
/// use lodging_backend::outbound::photo_store::object_key;
///
/// assert_eq!(
///     object_key("https://cdn.example.com/uploads/a%20b.jpg?v=2").as_deref(),
///     Some("uploads/a%20b.jpg"),
/// );
/// assert_eq!(object_key("not a url"), None);
/// ```
#[must_use]
pub fn object_key(photo_url: &str) -> Option<String> {
    let url = Url::parse(photo_url).ok()?;
    let key = url.path().trim_start_matches('/');
    if key.is_empty() {
        return None;
    }
    Some(key.to_owned())
}

/// Cleanup adapter that deletes objects from an HTTP object store.
pub struct ObjectStorePhotoCleanup {
    client: Client,
    endpoint: Url,
    catalogue: Option<DieselImageCatalogue>,
}

impl ObjectStorePhotoCleanup {
    /// Build an adapter for `endpoint`. A trailing slash is added when
    /// missing so keys are appended rather than replacing the last segment.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        mut endpoint: Url,
        catalogue: Option<DieselImageCatalogue>,
    ) -> Result<Self, reqwest::Error> {
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            catalogue,
        })
    }

    /// Target URL for deleting `key`.
    fn object_url(&self, key: &str) -> Result<Url, PhotoCleanupError> {
        self.endpoint
            .join(key)
            .map_err(|err| PhotoCleanupError::storage(key, err.to_string()))
    }

    async fn delete_object(&self, photo_url: &str) -> Result<(), PhotoCleanupError> {
        let key = object_key(photo_url)
            .ok_or_else(|| PhotoCleanupError::storage(photo_url, "no object key in url"))?;
        let target = self.object_url(&key)?;
        let response = self
            .client
            .delete(target)
            .send()
            .await
            .map_err(|err| PhotoCleanupError::storage(photo_url, err.to_string()))?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => {
                debug!(photo_url, "photo already absent from object store");
                Ok(())
            }
            status => Err(PhotoCleanupError::storage(
                photo_url,
                format!("object store returned {status}"),
            )),
        }
    }
}

#[async_trait]
impl PhotoCleanup for ObjectStorePhotoCleanup {
    async fn discard(&self, urls: &[String]) -> Result<(), PhotoCleanupError> {
        let mut failures = Vec::new();
        let mut deleted = Vec::with_capacity(urls.len());
        for url in urls {
            match self.delete_object(url).await {
                Ok(()) => deleted.push(url.clone()),
                Err(err) => {
                    warn!(photo_url = %url, error = %err, "photo deletion failed");
                    failures.push(err);
                }
            }
        }

        let forgotten = match &self.catalogue {
            Some(catalogue) => catalogue.forget(&deleted).await,
            None => Ok(0),
        };
        cleanup_outcome(failures, forgotten)
    }
}

/// Fold per-object failures and the catalogue result into one outcome.
/// Storage failures take precedence; a catalogue failure is still logged.
fn cleanup_outcome(
    failures: Vec<PhotoCleanupError>,
    forgotten: Result<usize, PhotoCleanupError>,
) -> Result<(), PhotoCleanupError> {
    let catalogue_failure = match forgotten {
        Ok(forgotten) => {
            debug!(forgotten, "image records removed");
            None
        }
        Err(err) => {
            warn!(error = %err, "image record cleanup failed");
            Some(err)
        }
    };

    let failed = failures.len();
    match failures.into_iter().next() {
        None => catalogue_failure.map_or(Ok(()), Err),
        Some(first) if failed == 1 => Err(first),
        Some(first) => Err(PhotoCleanupError::partial(failed, first.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://cdn.example.com/a.jpg", Some("a.jpg"))]
    #[case("https://cdn.example.com/u/1/a.jpg", Some("u/1/a.jpg"))]
    #[case("https://cdn.example.com/", None)]
    #[case("relative/a.jpg", None)]
    fn derives_object_keys(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(object_key(url).as_deref(), expected);
    }

    #[rstest]
    #[case("http://store.local/bucket")]
    #[case("http://store.local/bucket/")]
    fn object_url_appends_key_under_bucket(#[case] endpoint: &str) {
        let cleanup = ObjectStorePhotoCleanup::new(Url::parse(endpoint).expect("url"), None)
            .expect("client builds");
        let target = cleanup.object_url("u/1/a.jpg").expect("joined");
        assert_eq!(target.as_str(), "http://store.local/bucket/u/1/a.jpg");
    }

    fn storage(url: &str) -> PhotoCleanupError {
        PhotoCleanupError::storage(url, "timeout")
    }

    #[rstest]
    #[case::clean(Vec::new(), Ok(2), None)]
    #[case::catalogue_only(Vec::new(), Err(PhotoCleanupError::catalogue("down")), Some("catalogue"))]
    #[case::storage_beats_catalogue(
        vec![storage("a.jpg")],
        Err(PhotoCleanupError::catalogue("down")),
        Some("storage")
    )]
    #[case::several_storage(
        vec![storage("a.jpg"), storage("b.jpg")],
        Err(PhotoCleanupError::catalogue("down")),
        Some("partial")
    )]
    fn storage_failures_survive_catalogue_errors(
        #[case] failures: Vec<PhotoCleanupError>,
        #[case] forgotten: Result<usize, PhotoCleanupError>,
        #[case] expected: Option<&str>,
    ) {
        let kind = cleanup_outcome(failures, forgotten)
            .err()
            .map(|err| match err {
                PhotoCleanupError::Storage { .. } => "storage",
                PhotoCleanupError::Catalogue { .. } => "catalogue",
                PhotoCleanupError::Partial { .. } => "partial",
            });
        assert_eq!(kind, expected);
    }

    #[tokio::test]
    async fn unparsable_urls_are_reported_without_network() {
        let cleanup =
            ObjectStorePhotoCleanup::new(Url::parse("http://store.local/").expect("url"), None)
                .expect("client builds");
        let err = cleanup
            .discard(&["nope".to_owned()])
            .await
            .expect_err("no key");
        assert!(matches!(err, PhotoCleanupError::Storage { .. }));
    }
}
