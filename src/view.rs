//! Non-owning typed views over contiguous memory
//!
//! An [`ArrayView`] is a read-only window over a run of `T` values, an
//! [`ArrayViewMut`] is the writable flavor. Neither owns the memory it points
//! at: the lifetime parameter ties each view to whatever produced it, so a view
//! can never outlive its source.
//!
//! A mutable view converts into a read-only view of the same region without
//! copying. The reverse conversion does not exist.
//!
//! ```rust
//! use securedigest::{ArrayView, ArrayViewMut};
//!
//! let mut samples = vec![1.0f32, 2.0, 3.0];
//! let mut writable = ArrayViewMut::of_mut(&mut samples);
//! writable[0] = 10.0;
//!
//! let readable: ArrayView<'_, f32> = writable.into();
//! assert_eq!(readable.len(), 3);
//! assert_eq!(readable[0], 10.0);
//! ```
//!
//! Views can only be built over containers that store their elements densely
//! and contiguously. Anything else is rejected at compile time:
//!
//! ```rust,compile_fail
//! use securedigest::ArrayView;
//! use std::collections::VecDeque;
//!
//! let ring: VecDeque<u8> = VecDeque::new();
//! let _view = ArrayView::of(&ring);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::slice;

/// Containers whose elements live in one densely packed, contiguous run.
///
/// Implemented for arrays, slices, `Vec`, boxed slices, the byte storage of
/// `str` and `String`, and the views themselves. Ring buffers and linked lists
/// have no implementation.
pub trait Contiguous {
    /// The element type stored by the container
    type Element;

    /// Returns the contiguous element storage.
    fn elements(&self) -> &[Self::Element];
}

/// Contiguous containers that also allow writing through their storage.
///
/// `str` and `String` are not writable this way since arbitrary writes could
/// break their UTF-8 invariant.
pub trait ContiguousMut: Contiguous {
    /// Returns the contiguous element storage for writing.
    fn elements_mut(&mut self) -> &mut [Self::Element];
}

impl<T> Contiguous for [T] {
    type Element = T;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousMut for [T] {
    fn elements_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Contiguous for [T; N] {
    type Element = T;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> ContiguousMut for [T; N] {
    fn elements_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Contiguous for Vec<T> {
    type Element = T;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousMut for Vec<T> {
    fn elements_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Contiguous for Box<[T]> {
    type Element = T;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousMut for Box<[T]> {
    fn elements_mut(&mut self) -> &mut [T] {
        self
    }
}

impl Contiguous for str {
    type Element = u8;

    fn elements(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Contiguous for String {
    type Element = u8;

    fn elements(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// A read-only view over contiguous memory.
///
/// Cheap to copy: it is a pointer and a length. Indexing is bounds-checked;
/// [`ArrayView::get_unchecked`] is the unchecked read for hot paths where the
/// caller already knows the index is in range.
pub struct ArrayView<'a, T> {
    elements: &'a [T],
}

impl<'a, T> ArrayView<'a, T> {
    /// Creates a view over an existing slice.
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Creates a view from a raw pointer and an element count.
    ///
    /// A null pointer is accepted when `len` is zero.
    ///
    /// # Safety
    ///
    /// Unless `len` is zero, `data` must point to `len` initialized values of
    /// `T` that stay valid and unmodified for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if len == 0 {
            return Self::new(Default::default());
        }
        Self::new(slice::from_raw_parts(data, len))
    }

    /// Creates a view over any contiguous container.
    pub fn of<C>(container: &'a C) -> Self
    where
        C: Contiguous<Element = T> + ?Sized,
    {
        Self::new(container.elements())
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the raw pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Returns the viewed elements with the full lifetime of the source.
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }

    /// Returns the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elements.get(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayView::len`].
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        self.elements.get_unchecked(index)
    }

    /// Iterates over the viewed elements.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.elements.iter()
    }
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<T> Deref for ArrayView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.elements
    }
}

impl<T: PartialEq> PartialEq for ArrayView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

// Views frequently cover secrets, so only the shape is printed.
impl<T> fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayView").field("len", &self.len()).finish()
    }
}

impl<T> Contiguous for ArrayView<'_, T> {
    type Element = T;

    fn elements(&self) -> &[T] {
        self.elements
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> From<&'a [T]> for ArrayView<'a, T> {
    fn from(elements: &'a [T]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ArrayView<'a, T> {
    fn from(elements: &'a [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T> From<&'a Vec<T>> for ArrayView<'a, T> {
    fn from(elements: &'a Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<'a, T> From<ArrayViewMut<'a, T>> for ArrayView<'a, T> {
    fn from(view: ArrayViewMut<'a, T>) -> Self {
        Self::new(view.elements)
    }
}

/// A writable view over contiguous memory.
///
/// Holds exclusive access to the region for its lifetime. Use
/// [`ArrayViewMut::as_const`] to hand out a read-only view while keeping the
/// mutable one, or `.into()` to give up write access for good.
pub struct ArrayViewMut<'a, T> {
    elements: &'a mut [T],
}

impl<'a, T> ArrayViewMut<'a, T> {
    /// Creates a view over an existing mutable slice.
    pub fn new(elements: &'a mut [T]) -> Self {
        Self { elements }
    }

    /// Creates a writable view from a raw pointer and an element count.
    ///
    /// A null pointer is accepted when `len` is zero.
    ///
    /// # Safety
    ///
    /// Unless `len` is zero, `data` must point to `len` initialized values of
    /// `T`, valid for reads and writes and not accessed through any other
    /// pointer for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts_mut(data: *mut T, len: usize) -> Self {
        if len == 0 {
            return Self::new(Default::default());
        }
        Self::new(slice::from_raw_parts_mut(data, len))
    }

    /// Creates a writable view over any contiguous container.
    pub fn of_mut<C>(container: &'a mut C) -> Self
    where
        C: ContiguousMut<Element = T> + ?Sized,
    {
        Self::new(container.elements_mut())
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the raw pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Returns the raw mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.elements.as_mut_ptr()
    }

    pub fn as_slice(&self) -> &[T] {
        self.elements
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.elements
    }

    /// Consumes the view, returning the slice with the full source lifetime.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        self.elements
    }

    /// Borrows a read-only view of the same region.
    pub fn as_const(&self) -> ArrayView<'_, T> {
        ArrayView::new(self.elements)
    }

    /// Borrows a shorter-lived writable view of the same region.
    pub fn reborrow(&mut self) -> ArrayViewMut<'_, T> {
        ArrayViewMut::new(self.elements)
    }

    /// Returns the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the element at `index` for writing, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayViewMut::len`].
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.elements.get_unchecked(index)
    }

    /// Returns the element at `index` for writing without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayViewMut::len`].
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.elements.get_unchecked_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }
}

impl<T> Deref for ArrayViewMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.elements
    }
}

impl<T> DerefMut for ArrayViewMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.elements
    }
}

impl<T> fmt::Debug for ArrayViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayViewMut").field("len", &self.len()).finish()
    }
}

impl<T> Contiguous for ArrayViewMut<'_, T> {
    type Element = T;

    fn elements(&self) -> &[T] {
        self.elements
    }
}

impl<T> ContiguousMut for ArrayViewMut<'_, T> {
    fn elements_mut(&mut self) -> &mut [T] {
        self.elements
    }
}

impl<'a, T> IntoIterator for ArrayViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for ArrayViewMut<'a, T> {
    fn from(elements: &'a mut [T]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ArrayViewMut<'a, T> {
    fn from(elements: &'a mut [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for ArrayViewMut<'a, T> {
    fn from(elements: &'a mut Vec<T>) -> Self {
        Self::new(elements)
    }
}
