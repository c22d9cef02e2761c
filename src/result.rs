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

//! Error types and results for the uniarray library.

use std::collections::TryReserveError;

/// A specialized Result type for uniarray operations.
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Errors that can occur while constructing a sequence.
///
/// Access through an already constructed sequence never fails; these errors only come out of
/// constructors that validate their input once, and out of the owning [`Array`](crate::Array)
/// when it cannot obtain its storage.
#[derive(Debug)]
pub enum ArrayError {
    /// The owning container could not allocate storage for the requested number of elements.
    AllocationFailed {
        /// Number of elements requested.
        length: usize,
        /// Underlying reservation failure.
        source: TryReserveError,
    },
    /// A byte pitch of zero was requested.
    ZeroPitch,
    /// The first element or the pitch does not satisfy the alignment of the element type.
    Misaligned {
        /// Byte offset of the first element.
        offset: usize,
        /// Byte pitch between elements.
        pitch: usize,
        /// Required alignment of the element type.
        align: usize,
    },
    /// The requested elements extend beyond the end of the buffer.
    BufferTooSmall {
        /// Bytes needed to reach the end of the last element.
        required: usize,
        /// Bytes actually available.
        available: usize,
    },
    /// A mutable byte-pitched view was requested with a pitch smaller than the element, which
    /// would make neighbouring elements share bytes.
    OverlappingElements {
        /// Byte pitch between elements.
        pitch: usize,
        /// Size of the element type in bytes.
        size: usize,
    },
}

impl std::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::AllocationFailed { length, .. } => {
                write!(f, "Failed to allocate storage for {length} elements")
            }
            ArrayError::ZeroPitch => write!(f, "Byte pitch must be non-zero"),
            ArrayError::Misaligned {
                offset,
                pitch,
                align,
            } => write!(
                f,
                "Offset {offset} with pitch {pitch} is not aligned to {align} bytes"
            ),
            ArrayError::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "Buffer of {available} bytes is too small, {required} bytes required"
            ),
            ArrayError::OverlappingElements { pitch, size } => write!(
                f,
                "Pitch {pitch} is smaller than the element size {size}"
            ),
        }
    }
}

impl std::error::Error for ArrayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArrayError::AllocationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ArrayError::ZeroPitch.to_string(),
            "Byte pitch must be non-zero"
        );
        assert_eq!(
            ArrayError::BufferTooSmall {
                required: 16,
                available: 12
            }
            .to_string(),
            "Buffer of 12 bytes is too small, 16 bytes required"
        );
    }

    #[test]
    fn test_allocation_failure_has_source() {
        use std::error::Error;
        let source = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = ArrayError::AllocationFailed {
            length: usize::MAX,
            source,
        };
        assert!(err.source().is_some());
        assert!(ArrayError::ZeroPitch.source().is_none());
    }
}
