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

//! The owning array container.

use crate::asslice::AsSlice;
use crate::cursor::{RawCursor, RawCursorMut};
use crate::result::{ArrayError, ArrayResult};
use crate::sequence::{Iter, IterMut, Sequence, SequenceMut};
use crate::view::{ArrayView, ConstArrayView};
use std::ops::{Index, IndexMut};

/// A fixed-length array that owns its storage.
///
/// The storage is a single block obtained when the array is created and released exactly once
/// when the array is dropped. There is no way to grow or shrink it. Apart from ownership an
/// `Array` behaves exactly like an [`ArrayView`] over its own elements.
///
/// # Examples
///
/// ```rust
/// use uniarray::{Array, Sequence, SequenceMut};
///
/// let mut array = Array::<i32>::new(4)?;
/// *array.element_at_mut(1) = 5;
/// array[3] = 7;
/// assert_eq!(array.as_slice(), &[0, 5, 0, 7]);
/// assert_eq!(array.slice(1, 2).iter().copied().sum::<i32>(), 5);
/// # Ok::<(), uniarray::ArrayError>(())
/// ```
pub struct Array<T> {
    data: Box<[T]>,
}

/// An array of bytes.
pub type Buffer = Array<u8>;

impl<T> Array<T> {
    /// Allocates an array of `length` default values.
    pub fn new(length: usize) -> ArrayResult<Self>
    where
        T: Default,
    {
        Self::from_fn(length, |_| T::default())
    }

    /// Allocates an array of `length` copies of `value`.
    pub fn filled(length: usize, value: T) -> ArrayResult<Self>
    where
        T: Clone,
    {
        Self::from_fn(length, |_| value.clone())
    }

    /// Allocates an array holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> ArrayResult<Self>
    where
        T: Clone,
    {
        Self::from_fn(values.len(), |i| values[i].clone())
    }

    /// Allocates an array of `length` values where element `i` is `init(i)`.
    ///
    /// Returns [`ArrayError::AllocationFailed`] if the storage cannot be obtained. No array
    /// exists in that case.
    pub fn from_fn(length: usize, init: impl FnMut(usize) -> T) -> ArrayResult<Self> {
        let mut storage = Vec::new();
        if let Err(source) = storage.try_reserve_exact(length) {
            log::error!("{}:{}: failed allocation of {length} elements", file!(), line!());
            return Err(ArrayError::AllocationFailed { length, source });
        }
        storage.extend((0..length).map(init));
        let data = storage.into_boxed_slice();
        if !data.is_empty() {
            log::trace!(
                "allocated array of {} elements ({} bytes)",
                data.len(),
                size_of_val(&*data)
            );
        }
        Ok(Self { data })
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a read-only view of the elements.
    pub fn as_view(&self) -> ConstArrayView<'_, T> {
        ConstArrayView::new(&self.data)
    }

    /// Returns a mutable view of the elements.
    pub fn as_view_mut(&mut self) -> ArrayView<'_, T> {
        ArrayView::new(&mut self.data)
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        if !self.data.is_empty() {
            log::trace!("releasing array of {} elements", self.data.len());
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self {
            data: Box::default(),
        }
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for Array<T> {
    fn from(data: Box<[T]>) -> Self {
        Self { data }
    }
}

impl<T> Sequence for Array<T> {
    type Cursor<'s>
        = RawCursor<'s, T>
    where
        Self: 's;

    fn start(&self) -> RawCursor<'_, T> {
        RawCursor::new(&self.data)
    }

    fn length(&self) -> usize {
        self.data.len()
    }
}

impl<T> SequenceMut for Array<T> {
    type Target = T;
    type CursorMut<'s>
        = RawCursorMut<'s, T>
    where
        Self: 's;

    fn start_mut(&mut self) -> RawCursorMut<'_, T> {
        RawCursorMut::new(&mut self.data)
    }
}

impl<T> AsSlice for Array<T> {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        &self.data
    }
    fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'s, T> IntoIterator for &'s Array<T> {
    type Item = &'s T;
    type IntoIter = Iter<RawCursor<'s, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, T> IntoIterator for &'s mut Array<T> {
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
    fn test_new_is_default_filled() {
        let array = Array::<u16>::new(5).unwrap();
        assert_eq!(array.length(), 5);
        assert!(array.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_filled_and_from_slice() {
        let array = Array::filled(3, String::from("x")).unwrap();
        assert_eq!(array.as_slice(), &["x", "x", "x"]);
        let copy = Array::from_slice(&[1.5f64, 2.5]).unwrap();
        assert_eq!(copy.as_slice(), &[1.5, 2.5]);
        assert_eq!(copy.clone(), copy);
    }

    #[test]
    fn test_from_fn() {
        let array = Array::from_fn(4, |i| i * 3).unwrap();
        assert_eq!(array.as_slice(), &[0, 3, 6, 9]);
    }

    #[test]
    fn test_behaves_as_mutable_view() {
        let mut array = Array::<i64>::new(6).unwrap();
        for (i, slot) in array.iter_mut().enumerate() {
            *slot = i as i64;
        }
        {
            let mut middle = array.slice_mut(2, 2);
            *middle.element_at_mut(0) = -2;
        }
        array[5] = 50;
        assert_eq!(array.as_slice(), &[0, 1, -2, 3, 4, 50]);
        assert_eq!(*array.element_at(3), 3);
        assert_eq!(array.stride(2).iter().copied().collect::<Vec<_>>(), vec![0, -2, 4]);
    }

    #[test]
    fn test_views_share_storage() {
        let mut array = Array::<u8>::new(3).unwrap();
        array.as_view_mut()[1] = 9;
        assert_eq!(array.as_view().as_slice(), &[0, 9, 0]);
        let view = ConstArrayView::from_source(&array);
        assert_eq!(view.start().as_ptr(), array.as_slice().as_ptr());
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        let result = Array::<u64>::new(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::AllocationFailed {
                length: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_default_is_empty() {
        let array = Array::<u32>::default();
        assert!(array.is_empty());
        assert_eq!(array.start(), array.end());
        assert_eq!(Array::<u32>::new(0).unwrap(), array);
    }

    #[test]
    fn test_buffer() {
        let mut buffer = Buffer::new(4).unwrap();
        buffer.as_mut_slice().copy_from_slice(b"uvwx");
        assert_eq!(buffer.as_slice(), b"uvwx");
        assert_eq!(format!("{buffer:?}"), "[117, 118, 119, 120]");
    }

    #[test]
    fn test_from_vec() {
        let array = Array::from(vec![3, 2, 1]);
        assert_eq!(array.iter().rev().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
