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

//! Read-only strided access over another sequence.

use crate::cursor::{Cursor, Position};
use crate::sequence::{FromRawParts, Iter, Sequence};

/// A cursor that re-steps an inner cursor by a fixed multiplier.
///
/// There is no mutable counterpart. Every strided element is read through the inner cursor.
///
/// The cursor also counts its own logical steps, so positions stay distinct even when the
/// inner cursor's index range wraps around.
#[derive(Clone, Copy, Debug)]
pub struct StridedCursor<C> {
    inner: C,
    stride: usize,
    steps: usize,
}

impl<C: Position> StridedCursor<C> {
    /// Wraps `inner` so that every step moves it by `stride` elements.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    pub fn new(inner: C, stride: usize) -> Self {
        assert!(stride != 0, "stride must be non-zero");
        Self {
            inner,
            stride,
            steps: 0,
        }
    }

    /// Returns the wrapped cursor at the current position.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns the step multiplier.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<C: PartialEq> PartialEq for StridedCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps && self.inner == other.inner
    }
}

impl<C: Position> Position for StridedCursor<C> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.inner.advance_by(n.wrapping_mul(self.stride as isize));
        self.steps = self.steps.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.steps.wrapping_sub(other.steps) as isize
    }
}

impl<C: Cursor> Cursor for StridedCursor<C> {
    type Item = C::Item;

    #[inline]
    unsafe fn get(&self) -> C::Item {
        unsafe { self.inner.get() }
    }

    #[inline]
    unsafe fn at(&self, n: isize) -> C::Item {
        unsafe { self.inner.at(n.wrapping_mul(self.stride as isize)) }
    }
}

/// A read-only wrapper around a sequence that visits every `stride`-th element.
///
/// # Examples
///
/// ```rust
/// use uniarray::{ConstArrayView, Sequence};
///
/// let data = [0, 1, 2, 3, 4, 5, 6];
/// let view = ConstArrayView::new(&data);
/// let evens = view.stride(2);
/// assert_eq!(evens.length(), 4);
/// assert_eq!(evens.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConstArrayStride<C> {
    start: StridedCursor<C>,
    length: usize,
}

impl<C: Cursor> ConstArrayStride<C> {
    /// Creates a strided wrapper over `source`.
    ///
    /// The length is derived from the source as `ceil(source.length() / stride)`, so the
    /// wrapper always covers the first element and every `stride`-th element after it.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    pub fn new<'s, S>(source: &'s S, stride: usize) -> Self
    where
        S: Sequence<Cursor<'s> = C> + ?Sized,
    {
        assert!(stride != 0, "stride must be non-zero");
        let length = source.length().div_ceil(stride);
        Self {
            start: StridedCursor::new(source.start(), stride),
            length,
        }
    }

    /// Creates a strided wrapper over `source` holding exactly `length` elements.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero or if `length` exceeds `ceil(source.length() / stride)`.
    pub fn with_length<'s, S>(source: &'s S, stride: usize, length: usize) -> Self
    where
        S: Sequence<Cursor<'s> = C> + ?Sized,
    {
        let full = Self::new(source, stride);
        assert!(
            length <= full.length,
            "stride of {stride} over {} elements holds at most {}, not {length}",
            source.length(),
            full.length
        );
        Self { length, ..full }
    }

    /// Returns the step multiplier.
    pub fn step(&self) -> usize {
        self.start.stride
    }
}

impl<C: Cursor> Sequence for ConstArrayStride<C> {
    type Cursor<'s>
        = StridedCursor<C>
    where
        Self: 's;

    fn start(&self) -> StridedCursor<C> {
        self.start.clone()
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<C: Cursor> FromRawParts for ConstArrayStride<C> {
    type Seed = StridedCursor<C>;

    unsafe fn from_raw_parts(seed: StridedCursor<C>, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<C: Cursor> IntoIterator for ConstArrayStride<C> {
    type Item = C::Item;
    type IntoIter = Iter<StridedCursor<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstArrayView, FuncArray, RawCursor};

    #[test]
    fn test_stride_matches_source() {
        let data: Vec<u32> = (0..50).map(|i| i * 11).collect();
        let view = ConstArrayView::new(&data);
        for k in 1..=data.len() {
            let m = data.len() / k;
            let strided = ConstArrayStride::with_length(&view, k, m);
            assert_eq!(strided.length(), m);
            for i in 0..m {
                assert_eq!(strided.element_at(i), view.element_at(i * k));
            }
        }
    }

    #[test]
    fn test_derived_length_rounds_up() {
        let data = [0u8; 10];
        let view = ConstArrayView::new(&data);
        assert_eq!(view.stride(1).length(), 10);
        assert_eq!(view.stride(3).length(), 4);
        assert_eq!(view.stride(5).length(), 2);
        assert_eq!(view.stride(11).length(), 1);
        assert_eq!(ConstArrayView::<u8>::default().stride(4).length(), 0);
    }

    #[test]
    fn test_last_strided_element() {
        let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let view = ConstArrayView::new(&data);
        let strided = view.stride(3);
        assert_eq!(strided.iter().copied().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(strided.iter().rev().copied().collect::<Vec<_>>(), vec![9, 6, 3, 0]);
    }

    #[test]
    fn test_cursor_arithmetic() {
        let data = [0u64; 32];
        let start = StridedCursor::new(RawCursor::new(&data), 4);
        for n in [-2isize, 0, 1, 5] {
            let base = start.offset(3);
            assert_eq!(base.offset(n).distance_to(&base), n);
        }
        assert_eq!(start.offset(2).inner(), &RawCursor::new(&data).offset(8));
    }

    #[test]
    fn test_stride_of_computed_sequence() {
        let naturals = FuncArray::new(|i| i, 10);
        let odds = naturals.slice(1, 9).stride(2);
        assert_eq!(odds.iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_stride_of_stride() {
        let data: Vec<i32> = (0..16).collect();
        let view = ConstArrayView::new(&data);
        let by_two = view.stride(2);
        let by_six = by_two.stride(3);
        assert_eq!(by_six.iter().copied().collect::<Vec<_>>(), vec![0, 6, 12]);
    }

    #[test]
    fn test_step_accessor() {
        let data = [0u8; 9];
        let view = ConstArrayView::new(&data);
        let by_three = view.stride(3);
        assert_eq!(by_three.step(), 3);
        assert_eq!(by_three.stride(2).length(), 2);
    }

    #[test]
    fn test_stride_of_longest_computed_sequence() {
        let evens = FuncArray::new(|i| i, usize::MAX).stride(2);
        assert_eq!(evens.length(), usize::MAX / 2 + 1);
        assert!(!evens.is_empty());
        assert_ne!(evens.start(), evens.end());
        assert_eq!(evens.iter().len(), evens.length());
        assert_eq!(evens.iter().take(3).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(evens.element_at(evens.length() - 1), usize::MAX - 1);
        assert_eq!(evens.iter().next_back(), Some(usize::MAX - 1));
    }

    #[test]
    #[should_panic(expected = "stride must be non-zero")]
    fn test_zero_stride_panics() {
        let data = [1, 2, 3];
        let _ = ConstArrayView::new(&data).stride(0);
    }

    #[test]
    #[should_panic(expected = "holds at most")]
    fn test_explicit_length_too_long_panics() {
        let data = [1, 2, 3, 4];
        let view = ConstArrayView::new(&data);
        let _ = ConstArrayStride::with_length(&view, 2, 3);
    }
}
