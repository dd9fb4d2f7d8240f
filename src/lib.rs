//! A growable array built on an explicit raw-storage layer.
//!
//! [`RawMemory`] owns an uninitialized block sized for a number of elements
//! and never constructs or drops anything. [`Vector`] tracks which leading
//! slots of that block are live, and moves its elements into a new block
//! according to a [`Transfer`] policy whenever it grows.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod capacity;

pub(crate) mod error;

pub mod storage;

#[macro_use]
pub mod vec;

pub use {
    self::capacity::{Grow, GrowDoubling, GrowExact},
    self::error::{StorageError, UpdateError},
    self::storage::RawMemory,
    self::vec::{CloneInto, Relocate, Transfer, Vector},
};
