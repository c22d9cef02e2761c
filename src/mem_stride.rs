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

//! Views of values placed a fixed number of bytes apart inside a larger buffer.
//!
//! The byte pitch is independent of the element's natural size. This is how one field is read out
//! of an array of larger records, for example the normals channel of packed vertex data:
//!
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use uniarray::{ConstArrayMemStride, Sequence};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct Vertex {
//!     position: [f32; 3],
//!     normal: [f32; 3],
//! }
//!
//! let vertices = [
//!     Vertex { position: [0.0; 3], normal: [0.0, 0.0, 1.0] },
//!     Vertex { position: [1.0; 3], normal: [0.0, 1.0, 0.0] },
//! ];
//! let normals = ConstArrayMemStride::<[f32; 3]>::from_records(&vertices, 12).unwrap();
//! assert_eq!(normals[1], [0.0, 1.0, 0.0]);
//! ```
//!
//! Safe constructors validate the layout once. Element types must be valid for any bit pattern
//! ([`AnyBitPattern`]) to be read from raw bytes, and [`Pod`] to be written into them.

use crate::cursor::{Cursor, CursorMut, Position, element_distance};
use crate::result::{ArrayError, ArrayResult};
use crate::sequence::{FromRawParts, Iter, IterMut, Sequence, SequenceMut};
use bytemuck::{AnyBitPattern, NoUninit, Pod};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

/// Read-only cursor over values `pitch` bytes apart.
pub struct ConstMemStrideCursor<'a, T> {
    ptr: *const u8,
    pitch: usize,
    _marker: PhantomData<&'a T>,
}

static_assertions::assert_eq_size!(ConstMemStrideCursor<'static, u32>, (usize, usize));

impl<T> ConstMemStrideCursor<'_, T> {
    /// Creates a cursor at `ptr` that advances `pitch` bytes per element.
    ///
    /// # Panics
    ///
    /// Panics if `pitch` is zero.
    pub fn from_ptr(ptr: *const u8, pitch: usize) -> Self {
        assert!(pitch != 0, "pitch must be non-zero");
        Self {
            ptr,
            pitch,
            _marker: PhantomData,
        }
    }

    /// Returns the address of the current element.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Returns the byte distance between successive elements.
    pub fn pitch(&self) -> usize {
        self.pitch
    }
}

impl<T> Clone for ConstMemStrideCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstMemStrideCursor<'_, T> {}

impl<T> PartialEq for ConstMemStrideCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for ConstMemStrideCursor<'_, T> {}

impl<T> Default for ConstMemStrideCursor<'_, T> {
    fn default() -> Self {
        Self::from_ptr(dangling::<T>(), natural_pitch::<T>())
    }
}

impl<T> std::fmt::Debug for ConstMemStrideCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConstMemStrideCursor({:p}, pitch {})", self.ptr, self.pitch)
    }
}

impl<T> Position for ConstMemStrideCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n.wrapping_mul(self.pitch as isize));
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        element_distance(self.ptr.addr(), other.ptr.addr(), self.pitch)
    }
}

impl<'a, T> Cursor for ConstMemStrideCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    unsafe fn get(&self) -> &'a T {
        unsafe { &*self.ptr.cast::<T>() }
    }
}

unsafe impl<T: Sync> Send for ConstMemStrideCursor<'_, T> {}

unsafe impl<T: Sync> Sync for ConstMemStrideCursor<'_, T> {}

/// Mutable cursor over values `pitch` bytes apart.
pub struct MemStrideCursor<'a, T> {
    ptr: *mut u8,
    pitch: usize,
    _marker: PhantomData<&'a mut T>,
}

static_assertions::assert_eq_size!(MemStrideCursor<'static, u32>, (usize, usize));

impl<T> MemStrideCursor<'_, T> {
    /// Creates a cursor at `ptr` that advances `pitch` bytes per element.
    ///
    /// # Panics
    ///
    /// Panics if `pitch` is zero.
    pub fn from_ptr(ptr: *mut u8, pitch: usize) -> Self {
        assert!(pitch != 0, "pitch must be non-zero");
        Self {
            ptr,
            pitch,
            _marker: PhantomData,
        }
    }

    /// Returns the address of the current element.
    pub fn as_mut_ptr(&self) -> *mut u8 {
        self.ptr
    }

    /// Returns the byte distance between successive elements.
    pub fn pitch(&self) -> usize {
        self.pitch
    }
}

impl<T> Clone for MemStrideCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MemStrideCursor<'_, T> {}

impl<T> PartialEq for MemStrideCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for MemStrideCursor<'_, T> {}

impl<T> Default for MemStrideCursor<'_, T> {
    fn default() -> Self {
        Self::from_ptr(dangling::<T>().cast_mut(), natural_pitch::<T>())
    }
}

impl<T> std::fmt::Debug for MemStrideCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemStrideCursor({:p}, pitch {})", self.ptr, self.pitch)
    }
}

impl<T> Position for MemStrideCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n.wrapping_mul(self.pitch as isize));
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        element_distance(self.ptr.addr(), other.ptr.addr(), self.pitch)
    }
}

impl<T> CursorMut for MemStrideCursor<'_, T> {
    type Target = T;
    type Const<'r>
        = ConstMemStrideCursor<'r, T>
    where
        Self: 'r;

    fn as_const(&self) -> ConstMemStrideCursor<'_, T> {
        ConstMemStrideCursor::from_ptr(self.ptr, self.pitch)
    }

    #[inline]
    unsafe fn get_mut<'r>(&self) -> &'r mut T {
        unsafe { &mut *self.ptr.cast::<T>() }
    }
}

impl<'a, T> From<MemStrideCursor<'a, T>> for ConstMemStrideCursor<'a, T> {
    fn from(cursor: MemStrideCursor<'a, T>) -> Self {
        ConstMemStrideCursor::from_ptr(cursor.ptr, cursor.pitch)
    }
}

unsafe impl<T: Send> Send for MemStrideCursor<'_, T> {}

unsafe impl<T: Sync> Sync for MemStrideCursor<'_, T> {}

/// A read-only view of values that sit in one block of memory a fixed number of bytes apart.
pub struct ConstArrayMemStride<'a, T> {
    start: ConstMemStrideCursor<'a, T>,
    length: usize,
}

impl<'a, T: AnyBitPattern> ConstArrayMemStride<'a, T> {
    /// Creates a view of `length` values, the first at byte `offset` of `bytes` and each
    /// following one `pitch` bytes after the previous.
    ///
    /// `pitch` may be smaller than the element, in which case neighbouring values share bytes.
    pub fn new(bytes: &'a [u8], offset: usize, pitch: usize, length: usize) -> ArrayResult<Self> {
        validate::<T>(bytes.as_ptr().addr(), bytes.len(), offset, pitch, length, false)?;
        Ok(Self {
            start: ConstMemStrideCursor::from_ptr(bytes.as_ptr().wrapping_add(offset), pitch),
            length,
        })
    }

    /// Creates a view of the field at byte `field_offset` of every record.
    pub fn from_records<R: NoUninit>(records: &'a [R], field_offset: usize) -> ArrayResult<Self> {
        if size_of::<R>() == 0 {
            return Err(ArrayError::ZeroPitch);
        }
        Self::new(
            bytemuck::cast_slice(records),
            field_offset,
            size_of::<R>(),
            records.len(),
        )
    }
}

impl<T> ConstArrayMemStride<'_, T> {
    /// Returns the byte distance between successive elements.
    pub fn pitch(&self) -> usize {
        self.start.pitch
    }
}

impl<T> Clone for ConstArrayMemStride<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstArrayMemStride<'_, T> {}

impl<T> Default for ConstArrayMemStride<'_, T> {
    fn default() -> Self {
        Self {
            start: ConstMemStrideCursor::default(),
            length: 0,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ConstArrayMemStride<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> Sequence for ConstArrayMemStride<'a, T> {
    type Cursor<'s>
        = ConstMemStrideCursor<'a, T>
    where
        Self: 's;

    fn start(&self) -> ConstMemStrideCursor<'a, T> {
        self.start
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<'a, T> FromRawParts for ConstArrayMemStride<'a, T> {
    type Seed = ConstMemStrideCursor<'a, T>;

    unsafe fn from_raw_parts(seed: ConstMemStrideCursor<'a, T>, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<T> Index<usize> for ConstArrayMemStride<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<'a, T> IntoIterator for ConstArrayMemStride<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<ConstMemStrideCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &ConstArrayMemStride<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<ConstMemStrideCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A mutable view of values that sit in one block of memory a fixed number of bytes apart.
///
/// # Examples
///
/// ```rust
/// use uniarray::{ArrayMemStride, SequenceMut};
///
/// // (value, flags) pairs
/// let mut pairs = [[1u16, 0], [2, 0], [3, 0]];
/// let mut flags = ArrayMemStride::<u16>::from_records(&mut pairs, 2).unwrap();
/// flags.slice_mut(1, 2).iter_mut().for_each(|f| *f = 0xff);
/// assert_eq!(pairs, [[1, 0], [2, 0xff], [3, 0xff]]);
/// ```
pub struct ArrayMemStride<'a, T> {
    start: MemStrideCursor<'a, T>,
    length: usize,
}

impl<'a, T: Pod> ArrayMemStride<'a, T> {
    /// Creates a mutable view of `length` values, the first at byte `offset` of `bytes` and each
    /// following one `pitch` bytes after the previous.
    ///
    /// Unlike the read-only view, `pitch` must be at least the size of the element.
    pub fn new(
        bytes: &'a mut [u8],
        offset: usize,
        pitch: usize,
        length: usize,
    ) -> ArrayResult<Self> {
        validate::<T>(bytes.as_ptr().addr(), bytes.len(), offset, pitch, length, true)?;
        Ok(Self {
            start: MemStrideCursor::from_ptr(bytes.as_mut_ptr().wrapping_add(offset), pitch),
            length,
        })
    }

    /// Creates a mutable view of the field at byte `field_offset` of every record.
    pub fn from_records<R: Pod>(records: &'a mut [R], field_offset: usize) -> ArrayResult<Self> {
        if size_of::<R>() == 0 {
            return Err(ArrayError::ZeroPitch);
        }
        let length = records.len();
        Self::new(
            bytemuck::cast_slice_mut(records),
            field_offset,
            size_of::<R>(),
            length,
        )
    }
}

impl<'a, T> ArrayMemStride<'a, T> {
    /// Returns the byte distance between successive elements.
    pub fn pitch(&self) -> usize {
        self.start.pitch
    }

    /// Reborrows as a read-only view.
    pub fn as_const(&self) -> ConstArrayMemStride<'_, T> {
        unsafe { ConstArrayMemStride::from_raw_parts(self.start.as_const(), self.length) }
    }

    /// Converts into a read-only view for the full lifetime of the buffer.
    pub fn into_const(self) -> ConstArrayMemStride<'a, T> {
        unsafe { ConstArrayMemStride::from_raw_parts(self.start.into(), self.length) }
    }
}

impl<T> Default for ArrayMemStride<'_, T> {
    fn default() -> Self {
        Self {
            start: MemStrideCursor::default(),
            length: 0,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayMemStride<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Sequence for ArrayMemStride<'_, T> {
    type Cursor<'s>
        = ConstMemStrideCursor<'s, T>
    where
        Self: 's;

    fn start(&self) -> ConstMemStrideCursor<'_, T> {
        self.start.as_const()
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<T> SequenceMut for ArrayMemStride<'_, T> {
    type Target = T;
    type CursorMut<'s>
        = MemStrideCursor<'s, T>
    where
        Self: 's;

    fn start_mut(&mut self) -> MemStrideCursor<'_, T> {
        self.start
    }
}

impl<'a, T> FromRawParts for ArrayMemStride<'a, T> {
    type Seed = MemStrideCursor<'a, T>;

    unsafe fn from_raw_parts(seed: MemStrideCursor<'a, T>, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<T> Index<usize> for ArrayMemStride<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<T> IndexMut<usize> for ArrayMemStride<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.element_at_mut(index)
    }
}

impl<'a, T> IntoIterator for ArrayMemStride<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, MemStrideCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.start.offset(self.length as isize);
        unsafe { IterMut::new(self.start, end) }
    }
}

impl<'s, T> IntoIterator for &'s mut ArrayMemStride<'_, T> {
    type Item = &'s mut T;
    type IntoIter = IterMut<'s, MemStrideCursor<'s, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

fn natural_pitch<T>() -> usize {
    size_of::<T>().max(1)
}

fn dangling<T>() -> *const u8 {
    NonNull::<T>::dangling().as_ptr().cast::<u8>().cast_const()
}

/// Checks that `length` elements of `T`, `pitch` bytes apart from `offset`, fit inside the
/// `available` bytes at address `base` and are correctly aligned.
fn validate<T>(
    base: usize,
    available: usize,
    offset: usize,
    pitch: usize,
    length: usize,
    exclusive: bool,
) -> ArrayResult<()> {
    let size = size_of::<T>();
    let align = align_of::<T>();
    if pitch == 0 {
        return Err(ArrayError::ZeroPitch);
    }
    if exclusive && pitch < size {
        return Err(ArrayError::OverlappingElements { pitch, size });
    }
    if length == 0 {
        return Ok(());
    }
    if base.wrapping_add(offset) % align != 0 || pitch % align != 0 {
        return Err(ArrayError::Misaligned {
            offset,
            pitch,
            align,
        });
    }
    let required = (length - 1)
        .checked_mul(pitch)
        .and_then(|span| span.checked_add(offset))
        .and_then(|span| span.checked_add(size))
        .unwrap_or(usize::MAX);
    if required > available {
        return Err(ArrayError::BufferTooSmall {
            required,
            available,
        });
    }
    Ok(())
}
