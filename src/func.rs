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

//! Sequences computed on demand from a function of index.
//!
//! A [`FuncArray`] has no backing storage. Each access calls the stored function with the
//! logical index and returns the result, nothing is cached, and the memory used is independent
//! of the declared length. The function is expected to be pure. Only the logical index inside a
//! [`FuncCursor`] ever changes.

use crate::cursor::{Cursor, Position};
use crate::sequence::{FromRawParts, Iter, Sequence};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// A cursor that evaluates a function at its logical index.
#[derive(Clone, Copy)]
pub struct FuncCursor<F> {
    func: F,
    index: usize,
}

impl<F> FuncCursor<F> {
    /// Creates a cursor evaluating `func` starting at logical index `index`.
    pub fn new<T>(func: F, index: usize) -> Self
    where
        F: Fn(usize) -> T,
    {
        Self { func, index }
    }

    /// Returns the logical index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Evaluates the function at the current index.
    pub fn value<T>(&self) -> T
    where
        F: Fn(usize) -> T,
    {
        (self.func)(self.index)
    }
}

impl<F> PartialEq for FuncCursor<F> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<F> std::fmt::Debug for FuncCursor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FuncCursor({})", self.index)
    }
}

impl<F: Clone> Position for FuncCursor<F> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.index.wrapping_sub(other.index) as isize
    }
}

impl<T, F: Fn(usize) -> T + Clone> Cursor for FuncCursor<F> {
    type Item = T;

    #[inline]
    unsafe fn get(&self) -> T {
        self.value()
    }

    #[inline]
    unsafe fn at(&self, n: isize) -> T {
        (self.func)(self.index.wrapping_add_signed(n))
    }
}

/// A sequence that generates its values as needed using a function.
///
/// # Examples
///
/// ```rust
/// use uniarray::{FuncArray, Sequence};
///
/// let squares = FuncArray::new(|i| i * i, 1_000_000);
/// assert_eq!(squares.element_at(12), 144);
/// assert_eq!(squares.length(), 1_000_000);
/// ```
#[derive(Clone, Copy)]
pub struct FuncArray<F> {
    start: FuncCursor<F>,
    length: usize,
}

impl<F> FuncArray<F> {
    /// Creates a sequence of `length` values where element `i` is `func(i)`.
    pub fn new<T>(func: F, length: usize) -> Self
    where
        F: Fn(usize) -> T,
    {
        Self {
            start: FuncCursor::new(func, 0),
            length,
        }
    }
}

impl<F> std::fmt::Debug for FuncArray<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FuncArray {{ length: {} }}", self.length)
    }
}

impl<T, F: Fn(usize) -> T + Clone> Sequence for FuncArray<F> {
    type Cursor<'s>
        = FuncCursor<F>
    where
        Self: 's;

    fn start(&self) -> FuncCursor<F> {
        self.start.clone()
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<T, F: Fn(usize) -> T + Clone> FromRawParts for FuncArray<F> {
    type Seed = FuncCursor<F>;

    unsafe fn from_raw_parts(seed: FuncCursor<F>, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<T, F: Fn(usize) -> T + Clone> IntoIterator for FuncArray<F> {
    type Item = T;
    type IntoIter = Iter<FuncCursor<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the monotonically increasing sequence `start, start + 1, ...` of `length` values.
///
/// # Examples
///
/// ```rust
/// use uniarray::{iota, Sequence};
///
/// assert_eq!(iota(5, 3).iter().collect::<Vec<_>>(), vec![5, 6, 7]);
/// ```
pub fn iota(start: usize, length: usize) -> FuncArray<impl Fn(usize) -> usize + Copy> {
    FuncArray::new(move |i: usize| start.wrapping_add(i), length)
}

/// Returns a sequence holding `value` at every one of `length` positions.
pub fn repeat<T: Clone>(value: T, length: usize) -> FuncArray<impl Fn(usize) -> T + Clone> {
    FuncArray::new(move |_| value.clone(), length)
}

/// Returns `length` pseudo-random values derived from `seed`.
///
/// Element `i` is the first output of a [`StdRng`] keyed by `seed` and `i`, so values are a pure
/// function of `(seed, i)`: any element can be read in any order and reading it again gives the
/// same value.
///
/// # Examples
///
/// ```rust
/// use uniarray::{random, Sequence};
///
/// let noise = random(42, 1 << 40);
/// assert_eq!(noise.element_at(7), noise.element_at(7));
/// assert_ne!(noise.element_at(0), noise.element_at(1));
/// ```
pub fn random(seed: u64, length: usize) -> FuncArray<impl Fn(usize) -> u64 + Copy> {
    FuncArray::new(
        move |i: usize| {
            let mut key = <StdRng as SeedableRng>::Seed::default();
            key[..8].copy_from_slice(&seed.to_le_bytes());
            key[8..16].copy_from_slice(&(i as u64).to_le_bytes());
            StdRng::from_seed(key).next_u64()
        },
        length,
    )
}

/// Returns a sequence that lazily applies `func` to every element of `source`.
///
/// # Panics
///
/// Evaluating the result past the length of `source` panics.
///
/// # Examples
///
/// ```rust
/// use uniarray::{map, ConstArrayView, Sequence};
///
/// let data = [1.5f32, 2.5, 3.5];
/// let view = ConstArrayView::new(&data);
/// let rounded = map(&view, |v| v.floor() as i32);
/// assert_eq!(rounded.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn map<'s, S, U, F>(source: &'s S, func: F) -> FuncArray<impl Fn(usize) -> U + Clone>
where
    S: Sequence + ?Sized,
    F: Fn(<S::Cursor<'s> as Cursor>::Item) -> U + Clone,
{
    FuncArray::new(move |i| func(source.element_at(i)), source.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstArrayView;
    use std::cell::Cell;

    #[test]
    fn test_squares() {
        let squares = FuncArray::new(|i| i * i, 200);
        for i in 0..squares.length() {
            assert_eq!(squares.element_at(i), i * i);
        }
    }

    #[test]
    fn test_constant_memory() {
        let small = FuncArray::new(|i| i / 2, 1);
        let huge = FuncArray::new(|i| i / 2, usize::MAX);
        assert_eq!(size_of_val(&small), size_of_val(&huge));
        assert_eq!(size_of_val(&huge), 2 * size_of::<usize>());
        assert_eq!(huge.element_at(usize::MAX - 1), usize::MAX / 2);
    }

    #[test]
    fn test_evaluates_on_every_access() {
        let calls = Cell::new(0);
        let seq = FuncArray::new(
            |i| {
                calls.set(calls.get() + 1);
                i + 1
            },
            4,
        );
        assert_eq!(seq.element_at(2), 3);
        assert_eq!(seq.element_at(2), 3);
        assert_eq!(calls.get(), 2);
        assert_eq!(seq.iter().sum::<usize>(), 10);
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn test_cursor_law() {
        let seq = FuncArray::new(|i| i as i64 - 3, 10);
        let c = seq.start().offset(4);
        for n in [-4isize, -1, 0, 3, 5] {
            assert_eq!(c.offset(n).distance_to(&c), n);
            assert_eq!(unsafe { c.offset(n).get() }, unsafe { c.at(n) });
        }
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn test_from_raw_parts_offsets_index() {
        let seq = unsafe { FuncArray::from_raw_parts(FuncCursor::new(|i| i * 10, 5), 3) };
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![50, 60, 70]);
        assert_eq!(seq.start().index(), 5);
    }

    #[test]
    fn test_iota_and_repeat() {
        assert_eq!(iota(0, 4).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        let words = repeat(String::from("ab"), 3);
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["ab", "ab", "ab"]);
        assert!(repeat(1u8, 0).is_empty());
    }

    #[test]
    fn test_random_is_pure_function_of_index() {
        let noise = random(0, usize::MAX);
        assert_eq!(noise.element_at(usize::MAX - 1), noise.element_at(usize::MAX - 1));
        let forward: Vec<u64> = noise.slice(1000, 16).iter().collect();
        let backward: Vec<u64> = noise.slice(1000, 16).iter().rev().collect();
        assert_eq!(forward, backward.into_iter().rev().collect::<Vec<_>>());
        assert_eq!(noise.element_at(1003), forward[3]);
        assert_ne!(random(1, 4).element_at(2), random(2, 4).element_at(2));
        let distinct: std::collections::HashSet<u64> = random(7, 256).iter().collect();
        assert_eq!(distinct.len(), 256);
    }

    #[test]
    fn test_map_over_view() {
        let data = [1u32, 2, 3, 4];
        let view = ConstArrayView::new(&data);
        let squared = map(&view, |v| v * v);
        assert_eq!(squared.length(), 4);
        assert_eq!(squared.iter().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
        let strided = squared.stride(2);
        let halves = map(&strided, |v| v / 2);
        assert_eq!(halves.iter().collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn test_equality_ignores_function() {
        let seq = FuncArray::new(|i| i, 3);
        assert_eq!(seq.start().offset(3), seq.end());
        assert_eq!(format!("{:?}", seq.end()), "FuncCursor(3)");
    }
}
