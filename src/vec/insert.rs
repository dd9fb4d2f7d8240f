use core::mem::MaybeUninit;
use core::ptr;

/// Tracks a run of newly initialized slots within a block of raw storage.
///
/// Slots are filled in order starting from `start`. Should the inserter be
/// dropped before `complete` is called, for example while unwinding out of a
/// panicking `Clone` or `Default` implementation, every slot initialized so
/// far is dropped again, leaving the block as raw memory.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    #[inline]
    pub fn new(buf: &'a mut [MaybeUninit<T>], start: usize) -> Self {
        debug_assert!(start <= buf.len());
        Self {
            buf,
            start,
            end: start,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.buf[self.end].write(val.clone());
        self.end += 1;
    }

    /// The slots following the initialized run.
    #[inline]
    pub fn spare_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.buf[self.end..]
    }

    /// Mark the next `count` spare slots as initialized.
    ///
    /// # Safety
    /// The first `count` slots returned by `spare_mut` must have been
    /// initialized.
    #[inline]
    pub unsafe fn advance(&mut self, count: usize) {
        debug_assert!(self.end + count <= self.buf.len());
        self.end += count;
    }

    /// Keep the initialized slots, returning the number added and the
    /// index following the last one.
    #[inline]
    pub fn complete(mut self) -> (usize, usize) {
        let count = self.end - self.start;
        self.start = self.end;
        (count, self.end)
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}
