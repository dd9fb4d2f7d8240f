use core::alloc::Layout;

use crate::error::StorageError;

#[inline]
pub fn array_layout<T>(count: usize) -> Result<Layout, StorageError> {
    Ok(Layout::array::<T>(count)?)
}
