//! The global allocation strategy backing all raw storage.

use core::alloc::Layout;
use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use alloc_crate::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

use crate::error::StorageError;

#[cfg(all(not(test), feature = "alloc"))]
pub use alloc_crate::alloc::handle_alloc_error;

#[cfg(any(test, not(feature = "alloc")))]
/// Custom allocation error handler.
pub fn handle_alloc_error(layout: Layout) -> ! {
    panic!("memory allocation of {} bytes failed", layout.size());
}

#[cfg(feature = "alloc")]
#[inline]
fn alloc_block(layout: Layout) -> Result<NonNull<u8>, StorageError> {
    // SAFETY: the layout has a non-zero size.
    NonNull::new(unsafe { raw_alloc(layout) }).ok_or(StorageError::AllocError(layout))
}

#[cfg(not(feature = "alloc"))]
#[inline]
fn alloc_block(layout: Layout) -> Result<NonNull<u8>, StorageError> {
    Err(StorageError::AllocError(layout))
}

#[cfg(feature = "alloc")]
#[inline]
unsafe fn release_block(ptr: NonNull<u8>, layout: Layout) {
    raw_dealloc(ptr.as_ptr(), layout);
}

// Without an allocator no block can have been produced.
#[cfg(not(feature = "alloc"))]
#[inline]
unsafe fn release_block(_ptr: NonNull<u8>, _layout: Layout) {}

/// The process-wide allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

impl Global {
    /// Allocate a block of memory fitting `layout`, which must have a
    /// non-zero size.
    #[inline]
    pub fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, StorageError> {
        debug_assert!(layout.size() > 0, "zero-sized allocation");
        alloc_block(layout)
    }

    /// Release a block of memory.
    ///
    /// # Safety
    /// `ptr` must have been produced by `try_alloc` using the same `layout`,
    /// and must not have been released already.
    #[inline]
    pub unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            release_block(ptr, layout);
        }
    }
}
