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

//! The read-only and mutable sequence contracts, and the ranges they produce.
//!
//! A sequence is nothing more than a start cursor paired with a fixed length. Every concrete type
//! in this crate implements [`Sequence`], the writable ones also implement [`SequenceMut`], and
//! generic code written against these traits runs unchanged over contiguous, sliced, strided,
//! byte-pitched and computed data.
//!
//! # Examples
//!
//! ```rust
//! use std::borrow::Borrow;
//! use uniarray::{ConstArrayView, Cursor, FuncArray, Sequence};
//!
//! fn total<'s, S>(seq: &'s S) -> i64
//! where
//!     S: Sequence,
//!     <S::Cursor<'s> as Cursor>::Item: Borrow<i64>,
//! {
//!     seq.iter().map(|v| *v.borrow()).sum()
//! }
//!
//! let data = [1i64, 2, 3, 4];
//! assert_eq!(total(&ConstArrayView::new(&data)), 10);
//! assert_eq!(total(&FuncArray::new(|i| i as i64, 5)), 10);
//! ```

use crate::cursor::{Cursor, CursorMut, Position};
use crate::slice::{ArraySlice, ConstArraySlice};
use crate::stride::ConstArrayStride;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// The read-only sequence contract.
pub trait Sequence {
    /// Cursor type of the produced range, borrowing the sequence for `'s`.
    type Cursor<'s>: Cursor
    where
        Self: 's;

    /// Returns a cursor at the first element.
    fn start(&self) -> Self::Cursor<'_>;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Returns a cursor one past the last element.
    fn end(&self) -> Self::Cursor<'_> {
        self.start().offset(self.length() as isize)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.length()`.
    fn element_at(&self, index: usize) -> <Self::Cursor<'_> as Cursor>::Item {
        let length = self.length();
        assert!(
            index < length,
            "index {index} out of range for sequence of length {length}"
        );
        unsafe { self.element_at_unchecked(index) }
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    fn get(&self, index: usize) -> Option<<Self::Cursor<'_> as Cursor>::Item> {
        if index < self.length() {
            Some(unsafe { self.element_at_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns the element at `index` without checking the length.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.length()`.
    unsafe fn element_at_unchecked(&self, index: usize) -> <Self::Cursor<'_> as Cursor>::Item {
        debug_assert!(index < self.length());
        unsafe { self.start().at(index as isize) }
    }

    /// Returns the forward range from [`start`](Sequence::start) to [`end`](Sequence::end).
    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        unsafe { Iter::new(self.start(), self.end()) }
    }

    /// Returns a read-only slice of `size` elements starting at `offset`, sharing storage.
    ///
    /// # Panics
    ///
    /// Panics if `offset + size` exceeds the length of the sequence.
    fn slice(&self, offset: usize, size: usize) -> ConstArraySlice<Self::Cursor<'_>> {
        check_range(offset, size, self.length());
        unsafe { ConstArraySlice::from_raw_parts(self.start().offset(offset as isize), size) }
    }

    /// Returns every `stride`-th element, starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    fn stride(&self, stride: usize) -> ConstArrayStride<Self::Cursor<'_>> {
        ConstArrayStride::new(self, stride)
    }
}

/// The mutable sequence contract.
///
/// Read-only access stays available through the [`Sequence`] supertrait, so mutable sequences
/// can be handed to any read-only consumer.
pub trait SequenceMut: Sequence {
    /// The element type written through the sequence.
    type Target;

    /// Mutable cursor type, borrowing the sequence for `'s`.
    type CursorMut<'s>: CursorMut<Target = Self::Target>
    where
        Self: 's;

    /// Returns a mutable cursor at the first element.
    fn start_mut(&mut self) -> Self::CursorMut<'_>;

    /// Returns the element at `index` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.length()`.
    fn element_at_mut(&mut self, index: usize) -> &mut Self::Target {
        let length = self.length();
        assert!(
            index < length,
            "index {index} out of range for sequence of length {length}"
        );
        unsafe { self.element_at_unchecked_mut(index) }
    }

    /// Returns the element at `index` for writing, or `None` if it is out of range.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Target> {
        if index < self.length() {
            Some(unsafe { self.element_at_unchecked_mut(index) })
        } else {
            None
        }
    }

    /// Returns the element at `index` for writing without checking the length.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.length()`.
    unsafe fn element_at_unchecked_mut(&mut self, index: usize) -> &mut Self::Target {
        debug_assert!(index < self.length());
        unsafe { self.start_mut().offset(index as isize).get_mut() }
    }

    /// Returns the mutable forward range over every element.
    fn iter_mut(&mut self) -> IterMut<'_, Self::CursorMut<'_>> {
        let length = self.length() as isize;
        let start = self.start_mut();
        let end = start.offset(length);
        unsafe { IterMut::new(start, end) }
    }

    /// Returns a mutable slice of `size` elements starting at `offset`, sharing storage.
    ///
    /// # Panics
    ///
    /// Panics if `offset + size` exceeds the length of the sequence.
    fn slice_mut(&mut self, offset: usize, size: usize) -> ArraySlice<'_, Self::CursorMut<'_>> {
        check_range(offset, size, self.length());
        unsafe { ArraySlice::from_raw_parts(self.start_mut().offset(offset as isize), size) }
    }
}

/// Uniform `(seed, length)` construction shared by every borrowing sequence.
///
/// The seed is the start cursor of the new sequence. Generic code can build any concrete
/// sequence type from a cursor and a count through this trait.
pub trait FromRawParts: Sized {
    /// The cursor the sequence starts at.
    type Seed;

    /// Builds a sequence of `length` elements starting at `seed`.
    ///
    /// # Safety
    ///
    /// `length` elements must be reachable from `seed` and stay live for as long as the
    /// sequence is used. For mutable sequences those elements must not be reachable through any
    /// other live reference.
    unsafe fn from_raw_parts(seed: Self::Seed, length: usize) -> Self;
}

/// Forward range over a read-only sequence.
#[derive(Clone, Debug)]
pub struct Iter<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Iter<C> {
    /// # Safety
    ///
    /// Every position in `front..back` must be a live element.
    pub(crate) unsafe fn new(front: C, back: C) -> Self {
        Self { front, back }
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            None
        } else {
            let item = unsafe { self.front.get() };
            self.front.advance_by(1);
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<C::Item> {
        if n >= self.len() {
            self.front = self.back.clone();
            None
        } else {
            self.front.advance_by(n as isize);
            self.next()
        }
    }
}

impl<C: Cursor> DoubleEndedIterator for Iter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            None
        } else {
            self.back.advance_by(-1);
            Some(unsafe { self.back.get() })
        }
    }
}

impl<C: Cursor> ExactSizeIterator for Iter<C> {
    fn len(&self) -> usize {
        self.back.distance_to(&self.front) as usize
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

/// Forward range over a mutable sequence, yielding each element exactly once.
pub struct IterMut<'s, C: CursorMut> {
    front: C,
    back: C,
    _marker: PhantomData<&'s mut C::Target>,
}

impl<C: CursorMut> IterMut<'_, C> {
    /// # Safety
    ///
    /// Every position in `front..back` must be a live element that is exclusively borrowed for
    /// the lifetime of the iterator, and no two positions may share memory.
    pub(crate) unsafe fn new(front: C, back: C) -> Self {
        Self {
            front,
            back,
            _marker: PhantomData,
        }
    }
}

impl<'s, C: CursorMut> Iterator for IterMut<'s, C> {
    type Item = &'s mut C::Target;

    #[inline]
    fn next(&mut self) -> Option<&'s mut C::Target> {
        if self.front == self.back {
            None
        } else {
            let item = unsafe { self.front.get_mut() };
            self.front.advance_by(1);
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<'s, C: CursorMut> DoubleEndedIterator for IterMut<'s, C> {
    #[inline]
    fn next_back(&mut self) -> Option<&'s mut C::Target> {
        if self.front == self.back {
            None
        } else {
            self.back.advance_by(-1);
            Some(unsafe { self.back.get_mut() })
        }
    }
}

impl<C: CursorMut> ExactSizeIterator for IterMut<'_, C> {
    fn len(&self) -> usize {
        self.back.distance_to(&self.front) as usize
    }
}

impl<C: CursorMut> FusedIterator for IterMut<'_, C> {}

impl<C: CursorMut> std::fmt::Debug for IterMut<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IterMut {{ len: {} }}", self.len())
    }
}

pub(crate) fn check_range(offset: usize, size: usize, length: usize) {
    assert!(
        offset.checked_add(size).is_some_and(|end| end <= length),
        "range {offset}..{offset}+{size} out of range for sequence of length {length}"
    );
}
