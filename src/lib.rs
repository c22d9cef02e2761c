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

//! # Uniarray
//!
//! A Rust library providing one uniform array interface over data regardless of how it is laid out
//! in memory, or whether it is in memory at all. Generic algorithms written against the
//! [`Sequence`] and [`SequenceMut`] contracts run unchanged over every layout, without copying data.
//!
//! ## Key Features
//!
//! - **Uniform Access**: Every sequence exposes `start`/`end` cursors, `length`, `is_empty` and `element_at`
//! - **Zero Overhead**: Cursors are one or two words; advancing and indexing are constant time
//! - **No Copies**: Slices, strides and byte-pitched views share the storage they were built from
//! - **Computed Sequences**: Arbitrarily long sequences evaluated on demand with constant memory
//! - **Single Owner**: Only [`Array`] allocates, and it releases its block exactly once
//!
//! ## Sequence Types
//!
//! | Type | Cursor | Description |
//! |------|--------|-------------|
//! | [`Array`] | [`RawCursorMut`] | Owning fixed-length container |
//! | [`ArrayView`] / [`ConstArrayView`] | [`RawCursorMut`] / [`RawCursor`] | Contiguous borrowed memory |
//! | [`ArraySlice`] / [`ConstArraySlice`] | the source's | Sub-range of another sequence |
//! | [`ConstArrayStride`] | [`StridedCursor`] | Every k-th element of another sequence |
//! | [`ArrayMemStride`] / [`ConstArrayMemStride`] | [`MemStrideCursor`] / [`ConstMemStrideCursor`] | Values a fixed number of bytes apart |
//! | [`FuncArray`] | [`FuncCursor`] | Values computed from a function of index |
//!
//! ## Usage Examples
//!
//! ### Views, Slices and Strides
//!
//! ```rust
//! use uniarray::{ConstArrayView, Sequence};
//!
//! let data = [0, 1, 2, 3, 4, 5, 6, 7];
//! let view = ConstArrayView::new(&data);
//!
//! let middle = view.slice(2, 4);
//! assert_eq!(*middle.element_at(0), 2);
//!
//! let evens = view.stride(2);
//! assert_eq!(evens.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
//! ```
//!
//! ### Owning Arrays
//!
//! ```rust
//! use uniarray::{Buffer, SequenceMut};
//!
//! let mut buffer = Buffer::new(4)?;
//! for (i, byte) in buffer.iter_mut().enumerate() {
//!     *byte = i as u8;
//! }
//! assert_eq!(buffer.as_slice(), &[0, 1, 2, 3]);
//! # Ok::<(), uniarray::ArrayError>(())
//! ```
//!
//! ### Computed Sequences
//!
//! ```rust
//! use uniarray::{FuncArray, Sequence};
//!
//! let squares = FuncArray::new(|i| i * i, usize::MAX);
//! assert_eq!(squares.element_at(1000), 1_000_000);
//! ```
//!
//! ## Error Handling
//!
//! Access never reports errors. Constructors that validate their input return
//! `ArrayResult<T>`, which can contain the following errors:
//!
//! - `ArrayError::AllocationFailed`: An [`Array`] could not obtain its storage
//! - `ArrayError::ZeroPitch`, `ArrayError::Misaligned`, `ArrayError::BufferTooSmall` and
//!   `ArrayError::OverlappingElements`: A byte-pitched view does not fit its buffer
//!
//! Indexing past the end of a sequence panics. The `unsafe` unchecked accessors skip that check
//! and only assert it in debug builds.
//!
//! ## Thread Safety
//!
//! Views are `Send` and `Sync` exactly when the equivalent reference is. Any number of read-only
//! views may be read from any number of threads. Nothing in this crate synchronises writes.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

mod array;
mod asslice;
mod cursor;
mod func;
mod mem_stride;
mod result;
mod sequence;
mod slice;
mod stride;
mod view;

pub use self::array::{Array, Buffer};
pub use self::asslice::AsSlice;
pub use self::cursor::{Cursor, CursorMut, Position, RawCursor, RawCursorMut};
pub use self::func::{FuncArray, FuncCursor, iota, map, random, repeat};
pub use self::mem_stride::{
    ArrayMemStride, ConstArrayMemStride, ConstMemStrideCursor, MemStrideCursor,
};
pub use self::result::{ArrayError, ArrayResult};
pub use self::sequence::{FromRawParts, Iter, IterMut, Sequence, SequenceMut};
pub use self::slice::{ArraySlice, ConstArraySlice};
pub use self::stride::{ConstArrayStride, StridedCursor};
pub use self::view::{ArrayView, ConstArrayView};
