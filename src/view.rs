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

//! Views over contiguous memory without ownership.

use crate::asslice::AsSlice;
use crate::cursor::{CursorMut, Position, RawCursor, RawCursorMut};
use crate::sequence::{FromRawParts, Iter, IterMut, Sequence, SequenceMut};
use std::ops::{Index, IndexMut};

/// A read-only view into a contiguous buffer that has no ownership semantics but which can be
/// indexed, sliced and strided.
///
/// # Examples
///
/// ```rust
/// use uniarray::{ConstArrayView, Sequence};
///
/// let data = [1.0f32, 2.0, 3.0];
/// let view = ConstArrayView::new(&data);
/// assert_eq!(view.length(), 3);
/// assert_eq!(view[1], 2.0);
/// ```
pub struct ConstArrayView<'a, T> {
    start: RawCursor<'a, T>,
    length: usize,
}

impl<'a, T> ConstArrayView<'a, T> {
    /// Creates a view over every element of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        Self {
            start: RawCursor::new(slice),
            length: slice.len(),
        }
    }

    /// Creates a view over any contiguous container.
    pub fn from_source<S: AsSlice<Item = T> + ?Sized>(source: &'a S) -> Self {
        Self::new(source.as_slice())
    }

    /// Returns the viewed elements as a slice with the lifetime of the source.
    pub fn as_slice(&self) -> &'a [T] {
        unsafe { std::slice::from_raw_parts(self.start.as_ptr(), self.length) }
    }
}

impl<T> Clone for ConstArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstArrayView<'_, T> {}

impl<T> Default for ConstArrayView<'_, T> {
    fn default() -> Self {
        Self {
            start: RawCursor::dangling(),
            length: 0,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ConstArrayView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> Sequence for ConstArrayView<'a, T> {
    type Cursor<'s>
        = RawCursor<'a, T>
    where
        Self: 's;

    fn start(&self) -> RawCursor<'a, T> {
        self.start
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<'a, T> FromRawParts for ConstArrayView<'a, T> {
    type Seed = RawCursor<'a, T>;

    unsafe fn from_raw_parts(seed: RawCursor<'a, T>, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<T> Index<usize> for ConstArrayView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<'a, T> From<&'a [T]> for ConstArrayView<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T> IntoIterator for ConstArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<RawCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &ConstArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<RawCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A mutable view into a contiguous buffer without ownership semantics, which can be indexed,
/// sliced and strided.
///
/// # Examples
///
/// ```rust
/// use uniarray::{ArrayView, SequenceMut};
///
/// let mut data = [0u32; 4];
/// let mut view = ArrayView::new(&mut data);
/// *view.element_at_mut(2) = 7;
/// view[3] = 9;
/// assert_eq!(data, [0, 0, 7, 9]);
/// ```
pub struct ArrayView<'a, T> {
    start: RawCursorMut<'a, T>,
    length: usize,
}

impl<'a, T> ArrayView<'a, T> {
    /// Creates a view over every element of `slice`.
    pub fn new(slice: &'a mut [T]) -> Self {
        let length = slice.len();
        Self {
            start: RawCursorMut::new(slice),
            length,
        }
    }

    /// Creates a view over any contiguous container.
    pub fn from_source<S: AsSlice<Item = T> + ?Sized>(source: &'a mut S) -> Self {
        Self::new(source.as_slice_mut())
    }

    /// Returns the viewed elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.start.as_mut_ptr(), self.length) }
    }

    /// Returns the viewed elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.start.as_mut_ptr(), self.length) }
    }

    /// Reborrows as a read-only view.
    pub fn as_const(&self) -> ConstArrayView<'_, T> {
        unsafe { ConstArrayView::from_raw_parts(self.start.as_const(), self.length) }
    }

    /// Converts into a read-only view for the full lifetime of the source.
    pub fn into_const(self) -> ConstArrayView<'a, T> {
        unsafe { ConstArrayView::from_raw_parts(self.start.into(), self.length) }
    }
}

impl<T> Default for ArrayView<'_, T> {
    fn default() -> Self {
        Self {
            start: RawCursorMut::dangling(),
            length: 0,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Sequence for ArrayView<'_, T> {
    type Cursor<'s>
        = RawCursor<'s, T>
    where
        Self: 's;

    fn start(&self) -> RawCursor<'_, T> {
        self.start.as_const()
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<T> SequenceMut for ArrayView<'_, T> {
    type Target = T;
    type CursorMut<'s>
        = RawCursorMut<'s, T>
    where
        Self: 's;

    fn start_mut(&mut self) -> RawCursorMut<'_, T> {
        self.start
    }
}

impl<'a, T> FromRawParts for ArrayView<'a, T> {
    type Seed = RawCursorMut<'a, T>;

    unsafe fn from_raw_parts(seed: RawCursorMut<'a, T>, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<T> Index<usize> for ArrayView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<T> IndexMut<usize> for ArrayView<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.element_at_mut(index)
    }
}

impl<'a, T> From<&'a mut [T]> for ArrayView<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, RawCursorMut<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.start.offset(self.length as isize);
        unsafe { IterMut::new(self.start, end) }
    }
}

impl<'s, T> IntoIterator for &'s ArrayView<'_, T> {
    type Item = &'s T;
    type IntoIter = Iter<RawCursor<'s, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, T> IntoIterator for &'s mut ArrayView<'_, T> {
    type Item = &'s mut T;
    type IntoIter = IterMut<'s, RawCursorMut<'s, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_matches_buffer() {
        let data: Vec<u32> = (0..64).map(|i| i * 3 + 1).collect();
        let view = ConstArrayView::new(&data);
        assert_eq!(view.length(), data.len());
        for (i, expected) in data.iter().enumerate() {
            assert_eq!(view.element_at(i), expected);
        }
    }

    #[test]
    fn test_mutable_view_matches_buffer() {
        let mut data = vec![5i16, -3, 8];
        let expected = data.clone();
        let view = ArrayView::new(&mut data);
        for (i, value) in expected.iter().enumerate() {
            assert_eq!(view.element_at(i), value);
        }
    }

    #[test]
    fn test_writes_reach_source() {
        let mut data = vec![0u8; 8];
        {
            let mut view = ArrayView::from_source(&mut data);
            for (i, slot) in view.iter_mut().enumerate() {
                *slot = i as u8;
            }
            view[0] = 100;
        }
        assert_eq!(data, vec![100, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_const_reborrow() {
        let mut data = [1, 2, 3];
        let view = ArrayView::new(&mut data);
        let read = view.as_const();
        assert_eq!(read.as_slice(), &[1, 2, 3]);
        let owned = view.into_const();
        assert_eq!(owned[2], 3);
    }

    #[test]
    fn test_as_slices() {
        let mut data = [4, 5, 6];
        let mut view = ArrayView::new(&mut data);
        view.as_mut_slice().reverse();
        assert_eq!(view.as_slice(), &[6, 5, 4]);
    }

    #[test]
    fn test_into_iter() {
        let data = [1, 2, 3];
        let view = ConstArrayView::new(&data);
        let doubled: Vec<i32> = view.into_iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);

        let mut data = [1, 2, 3];
        for slot in ArrayView::new(&mut data) {
            *slot += 1;
        }
        assert_eq!(data, [2, 3, 4]);
    }

    #[test]
    fn test_from_raw_parts() {
        let data = [9u64, 8, 7, 6];
        let view = unsafe { ConstArrayView::from_raw_parts(RawCursor::new(&data[1..]), 2) };
        assert_eq!(view.as_slice(), &[8, 7]);
    }

    #[test]
    fn test_default_is_empty() {
        let view = ArrayView::<f64>::default();
        assert!(view.is_empty());
        assert_eq!(view.start(), view.end());
        assert!(view.as_slice().is_empty());
    }

    #[test]
    fn test_debug() {
        let data = [1, 2];
        assert_eq!(format!("{:?}", ConstArrayView::new(&data)), "[1, 2]");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConstArrayView<'static, u8>>();
        assert_send_sync::<ArrayView<'static, u8>>();
    }
}
