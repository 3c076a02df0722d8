//! Password digests
//!
//! A [`PasswordDigest`] stores the digest of a password instead of the
//! password itself. The digest is computed once, at construction, and kept
//! behind an `Arc`: clones share the same read-only bytes, and nothing can
//! modify them afterwards.
//!
//! ```rust
//! use securedigest::{PasswordDigest, SecretString, Sha256};
//!
//! let password = SecretString::unsafe_make("a super secret password").unwrap();
//! let stored = PasswordDigest::<Sha256>::new(&password).unwrap();
//!
//! let attempt = SecretString::unsafe_make("a super secret password").unwrap();
//! assert!(stored == attempt);
//! assert_eq!(stored.to_truncated_hex_string(4).len(), 8);
//! ```
//!
//! Comparisons are plain byte comparisons; they are not constant time.

use crate::bytes::ByteView;
use crate::digest::{digest, DigestKind, Sha256};
use crate::error::Result;
use crate::render::to_hex_string;
use crate::secret::SecretString;
use log::{trace, warn};
use std::fmt;
use std::sync::Arc;

/// Bytes rendered by the `Debug` implementation.
const DEBUG_PREFIX_LEN: usize = 8;

/// The digest of a password, shared read-only between clones.
///
/// The digest kind `K` defaults to [`Sha256`].
pub struct PasswordDigest<K: DigestKind = Sha256> {
    digest: Arc<K::Output>,
}

impl<K: DigestKind> PasswordDigest<K> {
    /// Digests `password` and stores the result.
    ///
    /// # Errors
    ///
    /// * `CryptoError::InvalidDigestSize` - If `K`'s output storage does not
    ///   match the size its engine produces
    /// * `CryptoError::DigestFailed` - If the hashing engine fails
    pub fn new(password: &SecretString) -> Result<Self> {
        let digest = digest::<K>(password.buffer())?;
        trace!("Created {} password digest", K::NAME);

        Ok(Self {
            digest: Arc::new(digest),
        })
    }

    /// Checks `password` against this digest by digesting it with the same
    /// kind and comparing the bytes.
    ///
    /// Unlike `==`, a failure to digest the candidate is reported instead of
    /// being treated as a mismatch.
    pub fn verify(&self, password: &SecretString) -> Result<bool> {
        Ok(*self == Self::new(password)?)
    }

    /// Returns true if both handles point at the same stored digest.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.digest, &other.digest)
    }

    /// Returns the stored digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        let output: &K::Output = &self.digest;
        output.as_ref()
    }

    /// Returns the digest size in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the digest kind produces zero-length digests.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the whole digest as lowercase hexadecimal.
    pub fn to_hex_string(&self) -> String {
        self.to_truncated_hex_string(self.len())
    }

    /// Renders the first `min(count, len())` digest bytes as lowercase
    /// hexadecimal, two characters per byte.
    pub fn to_truncated_hex_string(&self, count: usize) -> String {
        let bytes = self.as_bytes();
        to_hex_string(ByteView::new(&bytes[..count.min(bytes.len())]))
    }
}

impl<K: DigestKind> Clone for PasswordDigest<K> {
    fn clone(&self) -> Self {
        Self {
            digest: Arc::clone(&self.digest),
        }
    }
}

impl<K: DigestKind> PartialEq for PasswordDigest<K> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || *self.digest == *other.digest
    }
}

impl<K: DigestKind> Eq for PasswordDigest<K> {}

impl<K: DigestKind> PartialEq<SecretString> for PasswordDigest<K> {
    /// Digests `password` and compares. A digest failure compares unequal.
    fn eq(&self, password: &SecretString) -> bool {
        match self.verify(password) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Failed to digest candidate password with {}: {}", K::NAME, e);
                false
            }
        }
    }
}

impl<K: DigestKind> fmt::Debug for PasswordDigest<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("kind", &K::NAME)
            .field("prefix", &self.to_truncated_hex_string(DEBUG_PREFIX_LEN))
            .finish()
    }
}
