use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;
use core::slice;

use crate::storage::RawMemory;

/// An owning iterator over the elements of a [`Vector`](super::Vector).
pub struct IntoIter<T> {
    remain: Range<usize>,
    data: RawMemory<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(data: RawMemory<T>, len: usize) -> Self {
        Self {
            remain: Range { start: 0, end: len },
            data,
        }
    }

    /// Access the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.slot(self.remain.start), self.remain.len()) }
    }

    /// Access the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(self.data.slot_mut(self.remain.start), self.remain.len())
        }
    }

    fn clear(&mut self) {
        if !self.remain.is_empty() {
            let to_drop: *mut [T] = self.as_mut_slice();
            self.remain.start = self.remain.end;
            unsafe { ptr::drop_in_place(to_drop) };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> AsRef<[T]> for IntoIter<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for IntoIter<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.next()?;
        Some(unsafe { ptr::read(self.data.slot(index)) })
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remain.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.remain.next_back()?;
        Some(unsafe { ptr::read(self.data.slot(index)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
