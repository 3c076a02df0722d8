//! Digest computation and secure wiping
//!
//! The hashing itself is delegated to an engine behind the [`DigestKind`]
//! trait; [`Sha256`] and [`Sha512`] use the `sha2` crate. This module only
//! enforces the boundary contract: output storage must match the engine's
//! digest size before anything is hashed, engine failures propagate, and a
//! failed computation never leaves a partial digest behind.

use crate::bytes::{ByteView, ByteViewMut};
use crate::error::{CryptoError, Result};
use log::trace;
use std::fmt;
use ::zeroize::Zeroize;

/// Digest bytes produced by [`Sha256`].
pub type Sha256Digest = [u8; 32];

/// Digest bytes produced by [`Sha512`].
pub type Sha512Digest = [u8; 64];

/// A hashing engine producing fixed-size digests.
///
/// Implement this trait to plug another algorithm into
/// [`PasswordDigest`](crate::PasswordDigest).
///
/// # Example
///
/// ```rust
/// use securedigest::{digest, ByteView, DigestKind, Sha256};
///
/// let bytes = digest::<Sha256>(ByteView::from("abc")).unwrap();
/// assert_eq!(bytes.len(), Sha256::engine_output_size());
/// ```
pub trait DigestKind: Send + Sync + 'static {
    /// Fixed-size storage for one digest
    type Output: AsRef<[u8]> + AsMut<[u8]> + Copy + Eq + fmt::Debug + Send + Sync + 'static;

    /// Short algorithm name used in errors and logs
    const NAME: &'static str;

    /// Returns all-zero output storage.
    fn zeroed_output() -> Self::Output;

    /// Returns the digest size the engine produces, in bytes.
    fn engine_output_size() -> usize;

    /// Hashes `data` into `out`.
    ///
    /// Callers go through [`digest_into`], which has already checked that
    /// `out.len()` equals [`DigestKind::engine_output_size`].
    ///
    /// # Errors
    ///
    /// * `CryptoError::DigestFailed` - If the engine cannot initialize,
    ///   process the input, or finalize
    fn compute(data: &[u8], out: &mut [u8]) -> Result<()>;
}

/// SHA-256, 32-byte digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sha256;

/// SHA-512, 64-byte digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sha512;

impl DigestKind for Sha256 {
    type Output = Sha256Digest;

    const NAME: &'static str = "sha256";

    fn zeroed_output() -> Self::Output {
        [0u8; 32]
    }

    fn engine_output_size() -> usize {
        <sha2::Sha256 as sha2::Digest>::output_size()
    }

    fn compute(data: &[u8], out: &mut [u8]) -> Result<()> {
        compute_with::<sha2::Sha256>(Self::NAME, data, out)
    }
}

impl DigestKind for Sha512 {
    type Output = Sha512Digest;

    const NAME: &'static str = "sha512";

    fn zeroed_output() -> Self::Output {
        [0u8; 64]
    }

    fn engine_output_size() -> usize {
        <sha2::Sha512 as sha2::Digest>::output_size()
    }

    fn compute(data: &[u8], out: &mut [u8]) -> Result<()> {
        compute_with::<sha2::Sha512>(Self::NAME, data, out)
    }
}

fn compute_with<H: sha2::Digest>(kind: &'static str, data: &[u8], out: &mut [u8]) -> Result<()> {
    let mut hasher = H::new();
    hasher.update(data);
    let result = hasher.finalize();

    if result.len() != out.len() {
        return Err(CryptoError::InvalidDigestSize {
            kind,
            expected: result.len(),
            actual: out.len(),
        });
    }

    out.copy_from_slice(&result);
    Ok(())
}

/// Computes the digest of `buffer` into caller-provided storage.
///
/// # Arguments
///
/// * `buffer` - The bytes to hash
/// * `out` - Storage for the digest; must be exactly the engine's digest size
///
/// # Errors
///
/// * `CryptoError::InvalidDigestSize` - If `out` does not match the digest
///   size of `K`; nothing is hashed and `out` is left untouched
/// * `CryptoError::DigestFailed` - If the engine fails; `out` is wiped
///
/// # Example
///
/// ```rust
/// use securedigest::{digest_into, ByteView, Sha512};
///
/// let mut out = [0u8; 64];
/// digest_into::<Sha512>(ByteView::from("abc"), &mut out).unwrap();
/// assert_eq!(out[0], 0xdd);
/// ```
pub fn digest_into<K: DigestKind>(buffer: ByteView<'_>, out: &mut [u8]) -> Result<()> {
    let expected = K::engine_output_size();
    if out.len() != expected {
        return Err(CryptoError::InvalidDigestSize {
            kind: K::NAME,
            expected,
            actual: out.len(),
        });
    }

    trace!("Computing {} digest over {} bytes", K::NAME, buffer.len());

    if let Err(e) = K::compute(buffer.as_slice(), out) {
        out.zeroize();
        return Err(e);
    }

    Ok(())
}

/// Computes the digest of `buffer`, returning the fixed-size digest bytes.
pub fn digest<K: DigestKind>(buffer: ByteView<'_>) -> Result<K::Output> {
    let mut output = K::zeroed_output();
    digest_into::<K>(buffer, output.as_mut())?;
    Ok(output)
}

/// Overwrites every byte of `buffer` with zero.
///
/// Uses volatile writes followed by a compiler fence (the `zeroize` crate), so
/// the wipe survives dead-store elimination even when the buffer is about to
/// be freed.
pub fn zeroize(mut buffer: ByteViewMut<'_>) {
    buffer.as_mut_slice().zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{init_logging, is_zeroized};
    use hex_literal::hex;

    /// Engine that always fails after scribbling into its output.
    struct BrokenEngine;

    impl DigestKind for BrokenEngine {
        type Output = [u8; 4];

        const NAME: &'static str = "broken";

        fn zeroed_output() -> Self::Output {
            [0u8; 4]
        }

        fn engine_output_size() -> usize {
            4
        }

        fn compute(_data: &[u8], out: &mut [u8]) -> Result<()> {
            out.fill(0xEE);
            Err(CryptoError::DigestFailed {
                kind: Self::NAME,
                reason: "context initialization failed".to_string(),
            })
        }
    }

    /// Engine whose output storage disagrees with the size it reports.
    struct MismatchedEngine;

    impl DigestKind for MismatchedEngine {
        type Output = [u8; 16];

        const NAME: &'static str = "mismatched";

        fn zeroed_output() -> Self::Output {
            [0u8; 16]
        }

        fn engine_output_size() -> usize {
            32
        }

        fn compute(data: &[u8], out: &mut [u8]) -> Result<()> {
            compute_with::<sha2::Sha256>(Self::NAME, data, out)
        }
    }

    #[test]
    fn test_sha256_known_vectors() {
        init_logging();

        assert_eq!(
            digest::<Sha256>(ByteView::from("abc")).unwrap(),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert_eq!(
            digest::<Sha256>(ByteView::from("")).unwrap(),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn test_sha512_known_vector() {
        let expected = hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
        assert_eq!(digest::<Sha512>(ByteView::from("abc")).unwrap(), expected);
    }

    #[test]
    fn test_engine_sizes() {
        assert_eq!(Sha256::engine_output_size(), 32);
        assert_eq!(Sha512::engine_output_size(), 64);
    }

    #[test]
    fn test_size_mismatch_is_rejected_before_hashing() {
        let mut out = [0x55u8; 31];
        let err = digest_into::<Sha256>(ByteView::from("abc"), &mut out).unwrap_err();

        assert_eq!(
            err,
            CryptoError::InvalidDigestSize {
                kind: "sha256",
                expected: 32,
                actual: 31,
            }
        );
        assert!(out.iter().all(|&b| b == 0x55));
    }

    #[test]
    fn test_kind_storage_mismatch_is_rejected() {
        let result = digest::<MismatchedEngine>(ByteView::from("abc"));
        assert!(matches!(
            result,
            Err(CryptoError::InvalidDigestSize {
                expected: 32,
                actual: 16,
                ..
            })
        ));
    }

    #[test]
    fn test_engine_failure_propagates_and_wipes_output() {
        let mut out = [0u8; 4];
        let err = digest_into::<BrokenEngine>(ByteView::from("abc"), &mut out).unwrap_err();

        assert!(matches!(err, CryptoError::DigestFailed { kind: "broken", .. }));
        assert!(is_zeroized(&out));
        assert!(digest::<BrokenEngine>(ByteView::from("abc")).is_err());
    }

    #[test]
    fn test_zeroize_wipes_every_byte() {
        let mut buffer = vec![0xFFu8; 257];
        zeroize(ByteViewMut::from(&mut buffer));

        assert_eq!(buffer.len(), 257);
        assert!(is_zeroized(&buffer));
    }

    #[test]
    fn test_zeroize_empty_buffer() {
        let mut buffer: [u8; 0] = [];
        zeroize(ByteViewMut::from(&mut buffer));
    }
}
