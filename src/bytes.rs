//! Byte-typed views
//!
//! [`ByteView`] and [`ByteViewMut`] are the byte specializations of the typed
//! views. Besides the plain slice conversions they can be built from strings,
//! C strings, raw pointers, and any contiguous container whose elements are
//! plain bytes, in which case the view covers `len * size_of::<T>()` bytes.
//!
//! ```rust
//! use securedigest::bytes;
//! use securedigest::ByteView;
//!
//! let text = ByteView::from("Hello");
//! assert_eq!(text.len(), 5);
//!
//! let samples = vec![0.5f32; 4];
//! assert_eq!(bytes::view_of(&samples).len(), 16);
//! ```

use crate::view::{ArrayView, ArrayViewMut, Contiguous, ContiguousMut};
use std::ffi::{c_char, c_void, CStr};
use zerocopy::{AsBytes, FromBytes};

/// Read-only view over bytes.
pub type ByteView<'a> = ArrayView<'a, u8>;

/// Writable view over bytes.
pub type ByteViewMut<'a> = ArrayViewMut<'a, u8>;

/// Creates a byte view over the storage of a contiguous container.
///
/// The element type must be plain bytes (no padding, no invalid bit
/// patterns), which `zerocopy::AsBytes` guarantees.
pub fn view_of<C>(container: &C) -> ByteView<'_>
where
    C: Contiguous + ?Sized,
    C::Element: AsBytes,
{
    ByteView::new(container.elements().as_bytes())
}

/// Creates a writable byte view over the storage of a contiguous container.
///
/// Writing arbitrary bytes must leave every element valid, so the element
/// type has to be `FromBytes` as well. `bool` and `char` containers are
/// rejected for that reason.
pub fn view_of_mut<C>(container: &mut C) -> ByteViewMut<'_>
where
    C: ContiguousMut + ?Sized,
    C::Element: AsBytes + FromBytes,
{
    ByteViewMut::new(container.elements_mut().as_bytes_mut())
}

/// Creates a byte view from an untyped pointer and a byte count.
///
/// # Safety
///
/// Same contract as [`ArrayView::from_raw_parts`] with `len` counted in bytes.
pub unsafe fn from_raw_parts<'a>(data: *const c_void, len: usize) -> ByteView<'a> {
    ByteView::from_raw_parts(data.cast::<u8>(), len)
}

/// Creates a writable byte view from an untyped pointer and a byte count.
///
/// # Safety
///
/// Same contract as [`ArrayViewMut::from_raw_parts_mut`] with `len` counted
/// in bytes.
pub unsafe fn from_raw_parts_mut<'a>(data: *mut c_void, len: usize) -> ByteViewMut<'a> {
    ByteViewMut::from_raw_parts_mut(data.cast::<u8>(), len)
}

/// Creates a byte view over a NUL-terminated C string, terminator excluded.
///
/// # Safety
///
/// `data` must be non-null and point to a NUL-terminated string that stays
/// valid and unmodified for `'a`. See [`CStr::from_ptr`].
pub unsafe fn from_c_ptr<'a>(data: *const c_char) -> ByteView<'a> {
    ByteView::new(CStr::from_ptr(data).to_bytes())
}

impl<'a> From<&'a str> for ByteView<'a> {
    fn from(text: &'a str) -> Self {
        ByteView::new(text.as_bytes())
    }
}

impl<'a> From<&'a String> for ByteView<'a> {
    fn from(text: &'a String) -> Self {
        ByteView::new(text.as_bytes())
    }
}

impl<'a> From<&'a CStr> for ByteView<'a> {
    fn from(text: &'a CStr) -> Self {
        ByteView::new(text.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy_buffer(src: ByteView<'_>, mut dst: ByteViewMut<'_>) -> bool {
        if dst.len() < src.len() {
            return false;
        }
        dst[..src.len()].copy_from_slice(&src);
        true
    }

    #[test]
    fn test_text_views() {
        let owned = String::from("Hello world!");

        assert_eq!(ByteView::from("Hello world!"), ByteView::from(&owned));
        let terminated = CStr::from_bytes_with_nul(b"Hello world!\0").unwrap();
        assert_eq!(ByteView::from(terminated), ByteView::from(&owned));
        assert_eq!(ByteView::from("").len(), 0);
    }

    #[test]
    fn test_copy_into_fixed_array() {
        let text = "Hello world!";
        let mut storage = [0u8; 20];

        assert!(copy_buffer(text.into(), (&mut storage).into()));
        assert_ne!(ByteView::from(text), ByteView::from(&storage));

        let prefix = ByteView::new(&storage[..text.len()]);
        assert_eq!(prefix, ByteView::from(text));

        assert!(copy_buffer("Hola ".into(), ByteViewMut::new(&mut storage[..text.len()])));
        assert_eq!(&storage[..text.len()], b"Hola  world!");
    }

    #[test]
    fn test_copy_rejects_short_destination() {
        let mut storage = [0u8; 3];
        assert!(!copy_buffer("four".into(), (&mut storage).into()));
        assert_eq!(storage, [0u8; 3]);
    }

    #[test]
    fn test_typed_container_byte_length() {
        const SIZE: usize = 10_000;
        let source: Vec<f32> = (0..SIZE).map(|i| i as f32).collect();
        let mut target = vec![0.0f32; SIZE];

        assert_eq!(view_of(&source).len(), SIZE * std::mem::size_of::<f32>());
        assert_ne!(view_of(&source), view_of(&target));

        assert!(copy_buffer(view_of(&source), view_of_mut(&mut target)));
        assert_eq!(view_of(&source), view_of(&target));
        assert_eq!(source, target);
    }

    #[test]
    fn test_typed_view_aliases_container() {
        let mut words = [0u32; 2];
        let view = view_of_mut(&mut words);
        let ptr = view.as_ptr();

        assert_eq!(ptr, words.as_ptr().cast::<u8>());
    }

    #[test]
    fn test_raw_pointer_constructors() {
        let mut data = *b"raw bytes";
        let len = data.len();

        let view = unsafe { from_raw_parts(data.as_ptr().cast::<c_void>(), len) };
        assert_eq!(view.as_slice(), b"raw bytes");

        let mut writable = unsafe { from_raw_parts_mut(data.as_mut_ptr().cast::<c_void>(), 3) };
        writable.copy_from_slice(b"RAW");
        assert_eq!(&data, b"RAW bytes");
    }

    #[test]
    fn test_c_pointer_stops_at_terminator() {
        let terminated = b"secret\0trailing";
        let view = unsafe { from_c_ptr(terminated.as_ptr().cast::<c_char>()) };

        assert_eq!(view.as_slice(), b"secret");
    }
}
