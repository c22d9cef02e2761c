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

//! Trait definitions for slice-like access to contiguous data structures.

/// A trait for types that can be viewed as a contiguous slice of elements.
///
/// Any container implementing this trait can be wrapped in an [`ArrayView`](crate::ArrayView) or
/// [`ConstArrayView`](crate::ConstArrayView) without copying.
///
/// # Examples
///
/// ```rust
/// use uniarray::{AsSlice, ConstArrayView, Sequence};
///
/// // Vec<T> implements AsSlice
/// let mut vec = vec![1, 2, 3, 4, 5];
///
/// // Modify through mutable slice
/// AsSlice::as_slice_mut(&mut vec)[0] = 10;
///
/// let view = ConstArrayView::from_source(&vec);
/// assert_eq!(*view.element_at(0), 10);
/// ```
pub trait AsSlice {
    /// The type of elements contained in the slice.
    type Item;

    /// Returns an immutable reference to the slice.
    fn as_slice(&self) -> &[Self::Item];

    /// Returns a mutable reference to the slice.
    fn as_slice_mut(&mut self) -> &mut [Self::Item];
}

// Implementation for slices
impl<T> AsSlice for [T] {
    type Item = T;
    fn as_slice(&self) -> &[Self::Item] {
        self
    }
    fn as_slice_mut(&mut self) -> &mut [Self::Item] {
        self
    }
}

// Implementation for fixed-size arrays
impl<T, const N: usize> AsSlice for [T; N] {
    type Item = T;
    fn as_slice(&self) -> &[Self::Item] {
        self
    }
    fn as_slice_mut(&mut self) -> &mut [Self::Item] {
        self
    }
}

// Implementation for Vec<T>
impl<T> AsSlice for Vec<T> {
    type Item = T;
    fn as_slice(&self) -> &[Self::Item] {
        self.as_slice()
    }
    fn as_slice_mut(&mut self) -> &mut [Self::Item] {
        self.as_mut_slice()
    }
}

// Implementation for boxed slices
impl<T> AsSlice for Box<[T]> {
    type Item = T;
    fn as_slice(&self) -> &[Self::Item] {
        self
    }
    fn as_slice_mut(&mut self) -> &mut [Self::Item] {
        self
    }
}
