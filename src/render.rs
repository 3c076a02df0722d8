//! Hexadecimal rendering of byte views

use crate::bytes::ByteView;

/// Renders `buffer` as lowercase hexadecimal, two digits per byte, most
/// significant nibble first, with no prefix or separators.
///
/// The result is always `2 * buffer.len()` characters long; an empty view
/// renders as an empty string.
///
/// # Example
///
/// ```rust
/// use securedigest::{to_hex_string, ByteView};
///
/// assert_eq!(to_hex_string(ByteView::from(&[0x00u8, 0x0f, 0xa5, 0xff])), "000fa5ff");
/// ```
pub fn to_hex_string(buffer: ByteView<'_>) -> String {
    hex::encode(buffer.as_slice())
}
