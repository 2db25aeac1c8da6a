//! Driven port for named monotonic counters.
//!
//! Adapters must increment and read in one atomic step; a read followed by a
//! separate write lets concurrent callers observe the same value.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by sequence allocator adapters.
    pub enum SequenceAllocatorError {
        /// The store could not be reached.
        Connection { message: String } =>
            "sequence allocator connection failed: {message}",
        /// The increment statement failed.
        Query { message: String } =>
            "sequence allocator query failed: {message}",
    }
}

/// Mint sequential identifiers per counter name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Increment the counter called `name` and return its new value. A
    /// counter that does not exist yet starts at zero, so the first call
    /// returns 1.
    async fn next_id(&self, name: &str) -> Result<i64, SequenceAllocatorError>;
}
