//! Driven port for discarding photos that no listing references any more.

use async_trait::async_trait;
use tracing::debug;

use super::define_port_error;

define_port_error! {
    /// Errors raised while discarding photos.
    pub enum PhotoCleanupError {
        /// Deleting the stored object failed.
        Storage { url: String, message: String } =>
            "failed to delete photo {url}: {message}",
        /// Removing the image record failed.
        Catalogue { message: String } =>
            "failed to forget image records: {message}",
        /// Several photos failed; the first failure is kept.
        Partial { failed: usize, first: String } =>
            "{failed} photo deletions failed; first: {first}",
    }
}

/// Remove photo blobs and their bookkeeping records.
///
/// Callers invoke this after the owning write has committed and treat
/// failures as non-fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoCleanup: Send + Sync {
    /// Discard every photo in `urls`.
    async fn discard(&self, urls: &[String]) -> Result<(), PhotoCleanupError>;
}

/// Cleanup adapter used when no object store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpPhotoCleanup;

#[async_trait]
impl PhotoCleanup for NoOpPhotoCleanup {
    async fn discard(&self, urls: &[String]) -> Result<(), PhotoCleanupError> {
        debug!(count = urls.len(), "photo cleanup disabled; keeping objects");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_op_cleanup_always_succeeds() {
        NoOpPhotoCleanup
            .discard(&["https://cdn.example.com/a.jpg".to_owned()])
            .await
            .expect("no-op succeeds");
    }

    #[test]
    fn partial_error_reports_count() {
        let err = PhotoCleanupError::partial(2_usize, "timeout");
        assert_eq!(err.to_string(), "2 photo deletions failed; first: timeout");
    }
}
