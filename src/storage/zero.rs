use core::mem::{size_of, MaybeUninit};
use core::slice;

use zeroize::Zeroize;

use super::RawMemory;

impl<T> RawMemory<T> {
    /// Overwrite every byte of the block with zeroes.
    ///
    /// # Safety
    /// No slot may hold a live element, as its value would be destroyed
    /// without being dropped.
    pub unsafe fn zeroize_raw(&mut self) {
        let len = size_of::<T>() * self.capacity;
        if len > 0 {
            slice::from_raw_parts_mut(self.as_mut_ptr().cast::<MaybeUninit<u8>>(), len).zeroize();
        }
    }
}
