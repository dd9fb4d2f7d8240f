//! Growth behavior for collections which have exceeded their available storage.

use core::fmt::Debug;

/// Calculate the capacity to request when a collection must grow.
pub trait Grow: Debug {
    /// Calculate the next capacity to request from the allocator, given the
    /// current capacity and the minimum capacity that must be satisfied.
    fn next_capacity(prev: usize, minimum: usize) -> usize;
}

/// Growth behavior which never requests extra capacity.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowExact;

impl Grow for GrowExact {
    #[inline]
    fn next_capacity(_prev: usize, minimum: usize) -> usize {
        minimum
    }
}

/// Growth behavior which consistently doubles in size, starting from a
/// single element.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity(prev: usize, minimum: usize) -> usize {
        let preferred = if prev == 0 { 1 } else { prev.saturating_mul(2) };
        preferred.max(minimum)
    }
}
