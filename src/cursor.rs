//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Cursor contracts and the raw contiguous cursors.
//!
//! A cursor is a small copyable value naming one logical position inside a value source. Every
//! cursor can be advanced by any signed number of elements in constant time and compared for
//! equality with cursors of the same source. Dereferencing is `unsafe` because no cursor knows
//! the bounds of its source: moving a cursor anywhere is fine, reading outside the source is not.

use std::marker::PhantomData;
use std::ptr::NonNull;

/// Constant-time positioning shared by every cursor.
pub trait Position: Clone + PartialEq {
    /// Moves the cursor `n` elements forward, or backward for negative `n`.
    fn advance_by(&mut self, n: isize);

    /// Returns the signed number of elements `self` lies past `other`.
    ///
    /// This is the inverse of [`advance_by`](Position::advance_by):
    /// `c.offset(n).distance_to(&c) == n`. Both cursors must come from the same source.
    fn distance_to(&self, other: &Self) -> isize;

    /// Returns a copy of the cursor advanced by `n` elements.
    #[must_use]
    fn offset(&self, n: isize) -> Self {
        let mut cursor = self.clone();
        cursor.advance_by(n);
        cursor
    }
}

/// A cursor yielding read-only elements.
pub trait Cursor: Position {
    /// The element produced by a dereference. References for memory-backed cursors, values for
    /// computed ones.
    type Item;

    /// Reads the element at the current position.
    ///
    /// # Safety
    ///
    /// The cursor must denote a live element of the source it was created from.
    unsafe fn get(&self) -> Self::Item;

    /// Reads the element `n` positions away without moving the cursor.
    ///
    /// # Safety
    ///
    /// `self.offset(n)` must denote a live element of the source.
    unsafe fn at(&self, n: isize) -> Self::Item {
        unsafe { self.offset(n).get() }
    }
}

/// A cursor over writable memory.
///
/// Mutable cursors are never dereferenced through [`Cursor`]. They hand out a read-only cursor of
/// the same layout by value through [`as_const`](CursorMut::as_const), and exclusive references
/// through the unsafe [`get_mut`](CursorMut::get_mut).
pub trait CursorMut: Position {
    /// The element type the cursor points at.
    type Target;

    /// The read-only cursor with the same layout, borrowing for `'r`.
    type Const<'r>: Cursor
    where
        Self: 'r;

    /// Converts into the read-only cursor at the same position.
    fn as_const(&self) -> Self::Const<'_>;

    /// Returns an exclusive reference to the element at the current position.
    ///
    /// # Safety
    ///
    /// The cursor must denote a live element, and no other reference to that element may exist
    /// for the caller-chosen lifetime `'r`.
    unsafe fn get_mut<'r>(&self) -> &'r mut Self::Target;
}

/// Read-only cursor over contiguous memory, the equivalent of `*const T`.
pub struct RawCursor<'a, T> {
    ptr: *const T,
    _marker: PhantomData<&'a T>,
}

static_assertions::assert_eq_size!(RawCursor<'static, u64>, usize);

impl<'a, T> RawCursor<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        Self::from_ptr(slice.as_ptr())
    }

    /// Creates a cursor at `ptr`.
    pub fn from_ptr(ptr: *const T) -> Self {
        const { assert!(size_of::<T>() != 0, "zero-sized elements have no address") };
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Creates a cursor that denotes no element, used by empty sequences.
    pub fn dangling() -> Self {
        Self::from_ptr(NonNull::dangling().as_ptr())
    }

    /// Returns the address the cursor points at.
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for RawCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<'_, T> {}

impl<T> PartialEq for RawCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for RawCursor<'_, T> {}

impl<T> Default for RawCursor<'_, T> {
    fn default() -> Self {
        Self::dangling()
    }
}

impl<T> std::fmt::Debug for RawCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawCursor({:p})", self.ptr)
    }
}

impl<T> Position for RawCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        element_distance(self.ptr.addr(), other.ptr.addr(), size_of::<T>())
    }
}

impl<'a, T> Cursor for RawCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    unsafe fn get(&self) -> &'a T {
        unsafe { &*self.ptr }
    }
}

unsafe impl<T: Sync> Send for RawCursor<'_, T> {}

unsafe impl<T: Sync> Sync for RawCursor<'_, T> {}

/// Mutable cursor over contiguous memory, the equivalent of `*mut T`.
pub struct RawCursorMut<'a, T> {
    ptr: *mut T,
    _marker: PhantomData<&'a mut T>,
}

static_assertions::assert_eq_size!(RawCursorMut<'static, u64>, usize);

impl<'a, T> RawCursorMut<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self::from_ptr(slice.as_mut_ptr())
    }

    /// Creates a cursor at `ptr`.
    pub fn from_ptr(ptr: *mut T) -> Self {
        const { assert!(size_of::<T>() != 0, "zero-sized elements have no address") };
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Creates a cursor that denotes no element, used by empty sequences.
    pub fn dangling() -> Self {
        Self::from_ptr(NonNull::dangling().as_ptr())
    }

    /// Returns the address the cursor points at.
    pub fn as_mut_ptr(&self) -> *mut T {
        self.ptr
    }
}

impl<T> Clone for RawCursorMut<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursorMut<'_, T> {}

impl<T> PartialEq for RawCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for RawCursorMut<'_, T> {}

impl<T> Default for RawCursorMut<'_, T> {
    fn default() -> Self {
        Self::dangling()
    }
}

impl<T> std::fmt::Debug for RawCursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawCursorMut({:p})", self.ptr)
    }
}

impl<T> Position for RawCursorMut<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        element_distance(self.ptr.addr(), other.ptr.addr(), size_of::<T>())
    }
}

impl<T> CursorMut for RawCursorMut<'_, T> {
    type Target = T;
    type Const<'r>
        = RawCursor<'r, T>
    where
        Self: 'r;

    fn as_const(&self) -> RawCursor<'_, T> {
        RawCursor::from_ptr(self.ptr)
    }

    #[inline]
    unsafe fn get_mut<'r>(&self) -> &'r mut T {
        unsafe { &mut *self.ptr }
    }
}

impl<'a, T> From<RawCursorMut<'a, T>> for RawCursor<'a, T> {
    fn from(cursor: RawCursorMut<'a, T>) -> Self {
        RawCursor::from_ptr(cursor.ptr)
    }
}

unsafe impl<T: Send> Send for RawCursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for RawCursorMut<'_, T> {}

/// Signed element distance between two addresses `pitch` bytes apart per element.
#[inline]
pub(crate) fn element_distance(to: usize, from: usize, pitch: usize) -> isize {
    (to.wrapping_sub(from) as isize) / pitch as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dereference_and_index() {
        let data = [10, 20, 30, 40];
        let cursor = RawCursor::new(&data);
        unsafe {
            assert_eq!(*cursor.get(), 10);
            assert_eq!(*cursor.at(3), 40);
            assert_eq!(*cursor.offset(2).get(), 30);
        }
    }

    #[test]
    fn test_advance_and_distance_law() {
        let data = [0u32; 16];
        let cursor = RawCursor::new(&data);
        for n in [-4isize, -1, 0, 1, 7, 15] {
            let base = cursor.offset(4);
            assert_eq!(base.offset(n).distance_to(&base), n);
        }
    }

    #[test]
    fn test_advance_backward() {
        let data = [1u8, 2, 3];
        let mut cursor = RawCursor::new(&data);
        cursor.advance_by(2);
        cursor.advance_by(-1);
        assert_eq!(unsafe { *cursor.get() }, 2);
    }

    #[test]
    fn test_equality() {
        let data = [1u16, 2, 3];
        let a = RawCursor::new(&data);
        let b = a.offset(1);
        assert_ne!(a, b);
        assert_eq!(a.offset(1), b);
        assert_eq!(b.offset(-1), a);
    }

    #[test]
    fn test_mutable_cursor_write() {
        let mut data = [0i32; 4];
        let cursor = RawCursorMut::new(&mut data);
        unsafe {
            *cursor.offset(2).get_mut() = 5;
            assert_eq!(*cursor.as_const().at(2), 5);
        }
        assert_eq!(data, [0, 0, 5, 0]);
    }

    #[test]
    fn test_const_conversion_keeps_position() {
        let mut data = [1u64, 2, 3];
        let cursor = RawCursorMut::new(&mut data).offset(1);
        let read: RawCursor<'_, u64> = cursor.into();
        assert_eq!(unsafe { *read.get() }, 2);
    }

    #[test]
    fn test_dangling_cursors_compare_equal() {
        assert_eq!(RawCursor::<u32>::default(), RawCursor::<u32>::dangling());
        assert_eq!(RawCursorMut::<u32>::default(), RawCursorMut::<u32>::dangling());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RawCursor<'static, u8>>();
        assert_send_sync::<RawCursorMut<'static, u8>>();
    }
}
