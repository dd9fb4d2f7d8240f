//! Raw, uninitialized storage for a fixed number of elements.
//!
//! A [`RawMemory`] owns a single block sized for `capacity` values of `T`, but
//! never treats any of its slots as initialized: it does not construct, read
//! or drop elements. Tracking which slots are live is left to the owner.

use core::alloc::Layout;
use core::fmt;
use core::mem::{self, align_of, size_of, MaybeUninit};
use core::ptr::NonNull;
use core::slice;

use crate::error::StorageError;

pub mod alloc;

pub(crate) mod utils;

#[cfg(feature = "zeroize")]
mod zero;

use self::alloc::Global;
use self::utils::array_layout;

/// An exclusively-owned block of uninitialized memory for up to `capacity`
/// values of `T`.
pub struct RawMemory<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

impl<T> RawMemory<T> {
    /// Create an empty instance with no backing allocation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Allocate storage for `capacity` elements, panicking on failure.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to allocate storage for `capacity` elements. No allocation is
    /// performed for a zero capacity or a zero-sized `T`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = array_layout::<T>(capacity)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            Global.try_alloc(layout)?.cast()
        };
        Ok(Self { ptr, capacity })
    }

    /// The number of elements this block can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check whether this instance has a capacity of zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Access the start of the block.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Access the start of the block mutably.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Get the address of the slot at `index`. An index equal to the capacity
    /// produces the one-past-the-end address.
    #[inline]
    pub fn slot(&self, index: usize) -> *const T {
        debug_assert!(index <= self.capacity, "slot index out of bounds");
        // SAFETY: the offset stays within (or one past the end of) the block.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Get the mutable address of the slot at `index`. An index equal to the
    /// capacity produces the one-past-the-end address.
    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity, "slot index out of bounds");
        // SAFETY: the offset stays within (or one past the end of) the block.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Access the slot at `index` as uninitialized memory.
    ///
    /// # Safety
    /// The index must be less than the capacity. This is only checked in
    /// debug builds.
    #[inline]
    pub unsafe fn uninit_slot(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity, "slot index out of bounds");
        &mut *self.ptr.as_ptr().add(index).cast()
    }

    /// Access the whole block as a slice of uninitialized slots.
    #[inline]
    pub fn as_uninit_slice(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: the block is valid for `capacity` slots, and `MaybeUninit`
        // places no requirement on their contents.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.capacity) }
    }

    /// Exchange the blocks owned by two instances.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Move the block out of this instance, leaving it empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    #[inline]
    fn layout(&self) -> Layout {
        // SAFETY: the same layout was validated by `array_layout` when
        // the block was allocated.
        unsafe { Layout::from_size_align_unchecked(size_of::<T>() * self.capacity, align_of::<T>()) }
    }
}

impl<T> Default for RawMemory<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        if self.capacity > 0 {
            // SAFETY: a non-empty block came from `Global::try_alloc` with this
            // layout, and `release` ignores zero-sized layouts.
            unsafe { Global.release(self.ptr.cast(), self.layout()) };
        }
    }
}

// The block is uniquely owned, so thread-safety follows the element type.
unsafe impl<T: Send> Send for RawMemory<T> {}

unsafe impl<T: Sync> Sync for RawMemory<T> {}
