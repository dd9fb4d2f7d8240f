//! Policies for moving live elements into a new block during growth.

use core::fmt::Debug;
use core::mem::MaybeUninit;
use core::ptr;

use super::insert::Inserter;

/// A strategy for populating new storage from the live elements of the
/// current storage when a [`Vector`](super::Vector) reallocates.
///
/// Growth branches on [`Transfer::INFALLIBLE`]:
///
/// - an infallible transfer consumes its source elements. Once it returns,
///   the old slots are treated as raw memory and are never dropped.
/// - a fallible transfer duplicates them. The sources stay live and are only
///   dropped after every element has been transferred and the new storage
///   installed. If the transfer panics part way, the duplicates made so far
///   are dropped and the collection is left unchanged.
///
/// # Safety
/// Implementations must initialize exactly `src.len()` leading slots of
/// `dst`. An implementation declaring `INFALLIBLE` must never panic, and
/// must leave the source values logically moved. A fallible implementation must
/// leave the source values untouched and, when panicking, must not leave
/// any slot of `dst` initialized.
pub unsafe trait Transfer<T>: Debug {
    /// Whether this transfer can relocate elements without failure.
    const INFALLIBLE: bool;

    /// Initialize the leading `src.len()` slots of `dst` from `src`.
    ///
    /// # Safety
    /// `dst` must hold at least `src.len()` slots and must not overlap `src`.
    /// When `INFALLIBLE` is set, the caller must treat the values in `src`
    /// as moved once this returns.
    unsafe fn transfer(src: &[T], dst: &mut [MaybeUninit<T>]);
}

/// Bitwise relocation of elements.
///
/// Moving a value never fails, so this is the transfer selected for every
/// element type unless another policy is requested.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Relocate;

unsafe impl<T> Transfer<T> for Relocate {
    const INFALLIBLE: bool = true;

    #[inline]
    unsafe fn transfer(src: &[T], dst: &mut [MaybeUninit<T>]) {
        debug_assert!(dst.len() >= src.len());
        ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr().cast::<T>(), src.len());
    }
}

/// Element-wise duplication through `Clone`.
///
/// The original elements remain in place, fully valid, until all copies
/// have been made.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CloneInto;

unsafe impl<T: Clone> Transfer<T> for CloneInto {
    const INFALLIBLE: bool = false;

    #[inline]
    unsafe fn transfer(src: &[T], dst: &mut [MaybeUninit<T>]) {
        let mut insert = Inserter::new(&mut dst[..src.len()], 0);
        for item in src {
            insert.push_clone(item);
        }
        insert.complete();
    }
}
