//! Secret byte strings that are wiped before their memory is released
//!
//! A [`SecretString`] owns a fixed-length, NUL-terminated heap buffer. It is
//! built through one of two factories, which differ in what happens to the
//! caller's source bytes:
//!
//! - [`SecretString::clean_buffer_and_make`] copies the bytes and then wipes
//!   the caller's buffer in place
//! - [`SecretString::unsafe_make`] copies the bytes and leaves the source
//!   alone, for sources that are not sensitive at rest (literals, for example)
//!
//! Whenever the owned buffer is released (drop, [`SecretString::clear`], or
//! being overwritten by assignment, which drops the old value) every byte of
//! it is zeroized first.
//!
//! ```rust
//! use securedigest::SecretString;
//!
//! let mut typed = b"correct horse".to_vec();
//! let secret = SecretString::clean_buffer_and_make(&mut typed).unwrap();
//!
//! assert!(typed.iter().all(|&b| b == 0));
//! assert_eq!(secret.as_bytes(), b"correct horse");
//! ```

use crate::bytes::{ByteView, ByteViewMut};
use crate::digest;
use crate::error::{CryptoError, Result};
use crate::view::Contiguous;
use log::{debug, trace};
use std::ffi::c_char;
use std::fmt;
use std::ops::Add;
use zeroize::ZeroizeOnDrop;

// Stand-in storage for secrets that own no buffer.
static EMPTY_WITH_NUL: [u8; 1] = [0];

/// A fixed-length secret whose storage is zeroized before release.
///
/// The buffer always holds `len() + 1` bytes: the content followed by a NUL
/// terminator. A secret never aliases caller memory; every factory allocates
/// an independent buffer.
///
/// Cloning allocates a new independent buffer. Moving transfers the buffer
/// without wiping it; [`SecretString::take`] does the same through a
/// `&mut` reference and leaves an empty secret with no storage behind.
pub struct SecretString {
    storage: Option<Box<[u8]>>,
}

impl SecretString {
    /// Creates a secret from `buffer` and wipes `buffer` in place.
    ///
    /// Use this when the caller's buffer itself held the secret and must not
    /// keep a readable copy.
    ///
    /// # Arguments
    ///
    /// * `buffer` - The secret bytes; zeroized once they have been copied
    ///
    /// # Errors
    ///
    /// * `CryptoError::AllocationFailed` - If the secret's storage cannot be
    ///   allocated. The source buffer is left untouched in that case, so the
    ///   caller still owns the only copy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use securedigest::SecretString;
    ///
    /// let mut pin = [b'1', b'2', b'3', b'4'];
    /// let secret = SecretString::clean_buffer_and_make(&mut pin).unwrap();
    ///
    /// assert_eq!(pin, [0u8; 4]);
    /// assert_eq!(secret.len(), 4);
    /// ```
    pub fn clean_buffer_and_make<'a>(buffer: impl Into<ByteViewMut<'a>>) -> Result<Self> {
        let buffer: ByteViewMut<'a> = buffer.into();
        let secret = Self::try_from_parts(&[buffer.as_slice()])?;
        digest::zeroize(buffer);

        trace!("Created secret of {} bytes, source buffer wiped", secret.len());
        Ok(secret)
    }

    /// Creates a secret from `string` and wipes the string's bytes in place.
    ///
    /// The string keeps its length but every byte becomes `'\0'`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::AllocationFailed` - If the secret's storage cannot be
    ///   allocated; `string` is left untouched
    pub fn clean_string_and_make(string: &mut String) -> Result<Self> {
        // SAFETY: the bytes are only overwritten with zeros, which keeps the
        // string valid UTF-8.
        let bytes = unsafe { string.as_bytes_mut() };
        Self::clean_buffer_and_make(bytes)
    }

    /// Creates a secret from `buffer` without touching `buffer`.
    ///
    /// Use this when the source is not itself sensitive at rest, or when
    /// wiping it is the caller's separate responsibility.
    ///
    /// # Errors
    ///
    /// * `CryptoError::AllocationFailed` - If the secret's storage cannot be
    ///   allocated
    ///
    /// # Example
    ///
    /// ```rust
    /// use securedigest::SecretString;
    ///
    /// let secret = SecretString::unsafe_make("a super secret password").unwrap();
    /// assert_eq!(secret.len(), 23);
    /// ```
    pub fn unsafe_make<'a>(buffer: impl Into<ByteView<'a>>) -> Result<Self> {
        let buffer: ByteView<'a> = buffer.into();
        let secret = Self::try_from_parts(&[buffer.as_slice()])?;

        trace!("Created secret of {} bytes, source buffer kept", secret.len());
        Ok(secret)
    }

    /// Creates a secret holding `lhs` followed by `rhs`.
    ///
    /// Neither source is modified or wiped.
    ///
    /// # Errors
    ///
    /// * `CryptoError::AllocationFailed` - If the combined storage cannot be
    ///   allocated
    pub fn concat(lhs: ByteView<'_>, rhs: ByteView<'_>) -> Result<Self> {
        Self::try_from_parts(&[lhs.as_slice(), rhs.as_slice()])
    }

    /// Copies this secret into a new independent buffer, reporting allocation
    /// failure instead of aborting like [`Clone::clone`].
    pub fn try_clone(&self) -> Result<Self> {
        Self::try_from_parts(&[self.as_bytes()])
    }

    /// Returns the secret's length in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.storage.as_ref().map_or(0, |storage| storage.len() - 1)
    }

    /// Returns true if the secret holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the secret's content, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Some(storage) => &storage[..storage.len() - 1],
            None => &[],
        }
    }

    /// Returns the secret's content for in-place modification.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Some(storage) => {
                let len = storage.len() - 1;
                &mut storage[..len]
            }
            None => Default::default(),
        }
    }

    /// Returns the secret's content followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.storage.as_deref().unwrap_or(&EMPTY_WITH_NUL)
    }

    /// Returns a pointer to the NUL-terminated content, for C interfaces.
    ///
    /// The pointer is valid until the secret is modified, cleared or dropped.
    pub fn as_ptr(&self) -> *const c_char {
        self.as_bytes_with_nul().as_ptr().cast::<c_char>()
    }

    /// Returns a read-only view over the secret's content.
    pub fn buffer(&self) -> ByteView<'_> {
        ByteView::new(self.as_bytes())
    }

    /// Returns a writable view over the secret's content.
    pub fn buffer_mut(&mut self) -> ByteViewMut<'_> {
        ByteViewMut::new(self.as_bytes_mut())
    }

    /// Wipes and frees the storage immediately, leaving an empty secret.
    pub fn clear(&mut self) {
        if self.storage.is_some() {
            debug!("Clearing secret of {} bytes", self.len());
        }
        self.wipe();
    }

    /// Moves the storage out into a new secret, leaving `self` empty.
    ///
    /// No bytes are copied or wiped; ownership of the buffer transfers.
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
        }
    }

    fn try_from_parts(parts: &[&[u8]]) -> Result<Self> {
        let size = parts
            .iter()
            .try_fold(1usize, |total, part| total.checked_add(part.len()))
            .ok_or_else(|| CryptoError::AllocationFailed("secret length overflows usize".to_string()))?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(size)
            .map_err(|e| CryptoError::AllocationFailed(e.to_string()))?;
        // Zero-fill and shrink before any secret byte lands in the buffer, so a
        // reallocation can only ever move zeros around.
        storage.resize(size, 0);

        Ok(Self::fill(storage.into_boxed_slice(), parts))
    }

    fn from_parts(parts: &[&[u8]]) -> Self {
        let size = parts.iter().fold(1usize, |total, part| total.saturating_add(part.len()));
        Self::fill(vec![0u8; size].into_boxed_slice(), parts)
    }

    fn fill(mut storage: Box<[u8]>, parts: &[&[u8]]) -> Self {
        let mut offset = 0;
        for part in parts {
            storage[offset..offset + part.len()].copy_from_slice(part);
            offset += part.len();
        }
        // The final byte stays zero and terminates the string.
        Self {
            storage: Some(storage),
        }
    }

    fn wipe(&mut self) {
        if let Some(mut storage) = self.storage.take() {
            Self::scrub(&mut storage);
        }
    }

    fn scrub(storage: &mut [u8]) {
        digest::zeroize(ByteViewMut::new(storage));
        debug_assert!(storage.iter().all(|&b| b == 0), "secret storage not wiped");
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl ZeroizeOnDrop for SecretString {}

impl Default for SecretString {
    /// An empty secret that owns no storage.
    fn default() -> Self {
        Self { storage: None }
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::from_parts(&[self.as_bytes()])
    }
}

impl Add<&SecretString> for &SecretString {
    type Output = SecretString;

    /// Concatenates two secrets into a new one. Both operands are untouched.
    fn add(self, rhs: &SecretString) -> SecretString {
        SecretString::from_parts(&[self.as_bytes(), rhs.as_bytes()])
    }
}

impl Add for SecretString {
    type Output = SecretString;

    /// Concatenates two secrets into a new one; both operands are dropped,
    /// and therefore wiped, afterwards.
    fn add(self, rhs: SecretString) -> SecretString {
        &self + &rhs
    }
}

impl Contiguous for SecretString {
    type Element = u8;

    fn elements(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a SecretString> for ByteView<'a> {
    fn from(secret: &'a SecretString) -> Self {
        secret.buffer()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretString")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
