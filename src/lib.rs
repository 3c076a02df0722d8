//! # Secure Digest
//!
//! Primitives for handling sensitive bytes: typed views over memory, a secret
//! string that wipes its storage before releasing it, digest computation over
//! byte ranges, and a password digest that stores a hash instead of the
//! password.
//!
//! ## Features
//!
//! - **Typed Views**: Non-owning [`ArrayView`] / [`ArrayViewMut`] windows over
//!   contiguous containers, with [`ByteView`] constructors for strings, C
//!   strings, raw pointers and plain-data containers
//! - **Secret Strings**: [`SecretString`] copies secrets into its own buffer,
//!   optionally wiping the source, and zeroizes that buffer on drop, clear and
//!   reassignment
//! - **Digests**: SHA-256 and SHA-512 through the [`DigestKind`] engine
//!   boundary, with output-size checks before hashing
//! - **Password Digests**: [`PasswordDigest`] shares one read-only digest
//!   between clones and compares against digests or candidate passwords
//!
//! ## Basic Usage
//!
//! ```rust
//! use securedigest::{PasswordDigest, SecretString, Sha256};
//!
//! // The typed bytes are wiped as soon as the secret owns a copy
//! let mut typed = b"correct horse battery staple".to_vec();
//! let password = SecretString::clean_buffer_and_make(&mut typed).unwrap();
//! assert!(typed.iter().all(|&b| b == 0));
//!
//! let stored = PasswordDigest::<Sha256>::new(&password).unwrap();
//! drop(password); // storage is zeroized here
//!
//! let attempt = SecretString::unsafe_make("correct horse battery staple").unwrap();
//! assert!(stored == attempt);
//! assert_eq!(stored.to_hex_string().len(), 64);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T>`](Result), whose error type
//! [`CryptoError`] distinguishes misuse (mismatched digest sizes), hashing
//! engine failures, and allocation failures.
//!
//! ## Logging
//!
//! The crate logs through the `log` facade. Secret content and full digests
//! are never logged; only sizes, digest kinds, and short digest prefixes.

/// Typed non-owning views and the contiguity traits
pub mod view;

/// Byte views and their constructors
pub mod bytes;

/// Digest computation and secure wiping
pub mod digest;

/// Hexadecimal rendering
pub mod render;

/// Secret strings wiped before release
pub mod secret;

/// Password digests
pub mod password;

/// Error types
pub mod error;

#[cfg(test)]
mod test_utils;

// Re-export key types
pub use crate::bytes::{ByteView, ByteViewMut};
pub use crate::digest::{
    digest, digest_into, zeroize, DigestKind, Sha256, Sha256Digest, Sha512, Sha512Digest,
};
pub use crate::error::{CryptoError, Result};
pub use crate::password::PasswordDigest;
pub use crate::render::to_hex_string;
pub use crate::secret::SecretString;
pub use crate::view::{ArrayView, ArrayViewMut, Contiguous, ContiguousMut};
