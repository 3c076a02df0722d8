use thiserror::Error;

/// Errors that can occur in the securedigest library.
///
/// None of these conditions are transient: retrying a mismatched output size
/// or a broken hashing engine gives the same result, so callers should treat
/// every variant as final for the operation that produced it.
///
/// # Examples
///
/// ```rust
/// use securedigest::{digest_into, ByteView, CryptoError, Sha256};
///
/// let mut too_short = [0u8; 16];
/// let result = digest_into::<Sha256>(ByteView::from("abc"), &mut too_short);
///
/// assert!(matches!(result, Err(CryptoError::InvalidDigestSize { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The output storage does not match the digest size of the algorithm.
    ///
    /// This is a construction misuse: the computation is never started and
    /// the output storage is left untouched.
    #[error("invalid digest size for {kind}: expected {expected} bytes, got {actual}")]
    InvalidDigestSize {
        /// Name of the digest kind
        kind: &'static str,
        /// Output size reported by the hashing engine
        expected: usize,
        /// Size of the storage supplied by the caller
        actual: usize,
    },

    /// The hashing engine failed to initialize, update, or finalize.
    ///
    /// Any output written before the failure has been wiped; no partial digest
    /// is ever handed back to the caller.
    #[error("digest computation failure in {kind}: {reason}")]
    DigestFailed {
        /// Name of the digest kind
        kind: &'static str,
        /// Engine-provided description of the failure
        reason: String,
    },

    /// The storage for a secret could not be allocated.
    #[error("failed to allocate secret storage: {0}")]
    AllocationFailed(String),
}

/// Result type for securedigest operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
