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

//! Sub-ranges of existing sequences.
//!
//! A slice re-bases the start cursor of another sequence and truncates its length. It shares the
//! underlying storage and works with every cursor type, so slicing a byte-pitched view yields a
//! byte-pitched slice and slicing a computed sequence stays computed.

use crate::cursor::{Cursor, CursorMut};
use crate::sequence::{FromRawParts, Iter, Sequence, SequenceMut};
use std::marker::PhantomData;

/// A read-only range of elements taken from any sequence.
///
/// # Examples
///
/// ```rust
/// use uniarray::{ConstArrayView, Sequence};
///
/// let data = [0, 1, 2, 3, 4, 5];
/// let view = ConstArrayView::new(&data);
/// let slice = view.slice(2, 3);
/// assert_eq!(slice.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstArraySlice<C> {
    start: C,
    length: usize,
}

impl<C: Cursor> Sequence for ConstArraySlice<C> {
    type Cursor<'s>
        = C
    where
        Self: 's;

    fn start(&self) -> C {
        self.start.clone()
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<C: Cursor> FromRawParts for ConstArraySlice<C> {
    type Seed = C;

    unsafe fn from_raw_parts(seed: C, length: usize) -> Self {
        Self {
            start: seed,
            length,
        }
    }
}

impl<C: Cursor> IntoIterator for ConstArraySlice<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        self.iter()
    }
}

/// A mutable range of elements taken from any mutable sequence.
///
/// The slice exclusively borrows its source for `'s`.
///
/// # Examples
///
/// ```rust
/// use uniarray::{ArrayView, SequenceMut};
///
/// let mut data = [0u8; 6];
/// let mut view = ArrayView::new(&mut data);
/// let mut slice = view.slice_mut(1, 2);
/// *slice.element_at_mut(1) = 4;
/// assert_eq!(data, [0, 0, 4, 0, 0, 0]);
/// ```
pub struct ArraySlice<'s, C> {
    start: C,
    length: usize,
    _borrow: PhantomData<&'s mut ()>,
}

impl<C: CursorMut> ArraySlice<'_, C> {
    /// Reborrows as a read-only slice.
    pub fn as_const(&self) -> ConstArraySlice<C::Const<'_>> {
        unsafe { ConstArraySlice::from_raw_parts(self.start.as_const(), self.length) }
    }
}

impl<C: Default> Default for ArraySlice<'_, C> {
    fn default() -> Self {
        Self {
            start: C::default(),
            length: 0,
            _borrow: PhantomData,
        }
    }
}

impl<C> std::fmt::Debug for ArraySlice<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ArraySlice {{ length: {} }}", self.length)
    }
}

impl<C: CursorMut> Sequence for ArraySlice<'_, C> {
    type Cursor<'r>
        = C::Const<'r>
    where
        Self: 'r;

    fn start(&self) -> C::Const<'_> {
        self.start.as_const()
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<C: CursorMut> SequenceMut for ArraySlice<'_, C> {
    type Target = C::Target;
    type CursorMut<'r>
        = C
    where
        Self: 'r;

    fn start_mut(&mut self) -> C {
        self.start.clone()
    }
}

impl<C: CursorMut> FromRawParts for ArraySlice<'_, C> {
    type Seed = C;

    unsafe fn from_raw_parts(seed: C, length: usize) -> Self {
        Self {
            start: seed,
            length,
            _borrow: PhantomData,
        }
    }
}
