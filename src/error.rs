//! Failures reported by raw storage and the collections built on it.

use core::alloc::{Layout, LayoutError};
use core::fmt;

use crate::storage::alloc::handle_alloc_error;

/// The reasons raw storage for a number of elements could not be provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The allocator refused a block of this layout.
    AllocError(Layout),
    /// The requested element count overflows `usize`.
    CapacityLimit,
    /// No valid layout exists for the requested element count.
    LayoutError(LayoutError),
}

impl StorageError {
    /// A short description of the failure.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError(_) => "memory allocation failed",
            Self::CapacityLimit => "capacity overflow",
            Self::LayoutError(_) => "invalid array layout",
        }
    }

    /// The layout of the refused block, for allocation failures.
    pub fn layout(&self) -> Option<Layout> {
        match self {
            Self::AllocError(layout) => Some(*layout),
            _ => None,
        }
    }

    /// Abort the current operation. Allocation failures are passed to the
    /// allocation error handler, anything else panics.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        match self {
            Self::AllocError(layout) => handle_alloc_error(layout),
            other => panic!("{}", other),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocError(layout) => {
                write!(f, "{} ({} bytes)", self.as_str(), layout.size())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl From<LayoutError> for StorageError {
    #[inline]
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// A [`StorageError`] raised while adding a value, carrying that value back
/// to the caller.
#[derive(Clone)]
pub struct UpdateError<T> {
    error: StorageError,
    value: T,
}

impl<T> UpdateError<T> {
    pub(crate) fn new(error: StorageError, value: T) -> Self {
        Self { error, value }
    }

    /// The underlying storage failure.
    pub fn error(&self) -> &StorageError {
        &self.error
    }

    /// Recover the value which was not stored.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into the storage failure and the value.
    pub fn into_parts(self) -> (StorageError, T) {
        (self.error, self.value)
    }

    /// Drop the value and abort as [`StorageError::panic`] does.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        self.error.panic()
    }
}

impl<T> fmt::Debug for UpdateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for UpdateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value not stored: {}", self.error)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for UpdateError<T> {}
