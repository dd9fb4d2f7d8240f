//! A growable array layered over [`RawMemory`].
//!
//! The first `len` slots of the storage hold live elements and every slot
//! beyond that is raw memory. An operation which fails, including by way of
//! an element's `Clone` or `Default` implementation panicking part way
//! through, leaves the existing elements untouched and drops any values it
//! had already constructed.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::capacity::{Grow, GrowDoubling};
use crate::error::{StorageError, UpdateError};
use crate::storage::RawMemory;

use self::insert::Inserter;

pub use self::into_iter::IntoIter;
pub use self::transfer::{CloneInto, Relocate, Transfer};

#[macro_use]
mod macros;

pub(crate) mod insert;
mod into_iter;
pub mod transfer;

#[cold]
#[inline(never)]
pub(super) fn index_panic() -> ! {
    panic!("Invalid element index");
}

/// Create a `Vector<T>` holding `count` clones of `elem`.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> Vector<T> {
    let mut vec = Vector::with_capacity(count);
    vec.resize_with(count, || elem.clone());
    vec
}

/// A contiguous growable array.
///
/// `P` selects how elements are carried over when the storage is
/// reallocated (see [`Transfer`]), and `G` selects how much capacity is
/// requested when the vector runs out of room.
pub struct Vector<T, P = Relocate, G = GrowDoubling> {
    data: RawMemory<T>,
    len: usize,
    _marker: PhantomData<(T, fn() -> (P, G))>,
}

impl<T, P, G> Vector<T, P, G> {
    /// Constructs a new, empty `Vector`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use rawmem_vec::Vector;
    ///
    /// let mut vec = Vector::<i32>::new();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            data: RawMemory::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Constructs a new, empty `Vector` with space for exactly `capacity`
    /// elements, panicking on allocation failure.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a new, empty `Vector` with space for exactly
    /// `capacity` elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            data: RawMemory::try_with_capacity(capacity)?,
            len: 0,
            _marker: PhantomData,
        })
    }

    /// Constructs a `Vector` holding `len` default values.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        match Self::try_with_len(len) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a `Vector` holding `len` default values. Exactly
    /// `len` slots are allocated.
    pub fn try_with_len(len: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        let mut vec = Self::try_with_capacity(len)?;
        vec.fill_spare_with(len, T::default);
        Ok(vec)
    }

    /// Try to clone this vector into storage of exactly `self.len()` slots.
    ///
    /// Should an element's `clone` panic, the clones made so far are dropped
    /// and the panic resumes; `self` is never modified.
    pub fn try_clone(&self) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut data = RawMemory::try_with_capacity(self.len)?;
        let mut insert = Inserter::new(data.as_uninit_slice(), 0);
        for item in self.as_slice() {
            insert.push_clone(item);
        }
        let (_, len) = insert.complete();
        Ok(Self {
            data,
            len,
            _marker: PhantomData,
        })
    }

    /// A raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// A mutable raw pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Access the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Access the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr(), self.len) }
    }

    /// The number of elements the current storage can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Access an element without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `self.len()`. This is only checked in debug
    /// builds.
    #[inline]
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "element index out of bounds");
        &*self.data.slot(index)
    }

    /// Mutably access an element without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `self.len()`. This is only checked in debug
    /// builds.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "element index out of bounds");
        &mut *self.data.slot_mut(index)
    }

    /// Drop every element, retaining the current capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop the elements beyond `len`, retaining the current capacity. Has
    /// no effect if `len` is not less than the current length.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len < old_len {
            self.len = len;
            unsafe {
                let to_drop: &mut [T] =
                    slice::from_raw_parts_mut(self.data.slot_mut(len), old_len - len);
                ptr::drop_in_place(to_drop);
            }
        }
    }

    /// Drop the last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            index_panic();
        }
        unsafe { self.pop_back_unchecked() }
    }

    /// Drop the last element without checking the length.
    ///
    /// # Safety
    /// The vector must not be empty. This is only checked in debug builds.
    #[inline]
    pub unsafe fn pop_back_unchecked(&mut self) {
        debug_assert!(self.len > 0, "pop_back on an empty vector");
        self.len -= 1;
        ptr::drop_in_place(self.data.slot_mut(self.len));
    }

    /// Remove the last element and return it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len > 0 {
            self.len -= 1;
            Some(unsafe { ptr::read(self.data.slot(self.len)) })
        } else {
            None
        }
    }

    /// Drop the element at `index`, shifting every following element one
    /// slot towards the front.
    ///
    /// Returns the element which now occupies `index`, or `None` if the
    /// erased element was the last one.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    pub fn erase(&mut self, index: usize) -> Option<&mut T> {
        drop(self.remove(index));
        self.as_mut_slice().get_mut(index)
    }

    /// Remove and return the element at `index`, shifting every following
    /// element one slot towards the front.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            index_panic();
        }
        unsafe {
            let head = self.data.slot_mut(index);
            let result = ptr::read(head);
            ptr::copy(head.add(1), head, len - index - 1);
            self.len = len - 1;
            result
        }
    }

    /// Exchange the contents of two vectors without touching any element.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out of this vector, leaving it empty with no
    /// allocated storage.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            data: self.data.take(),
            len: mem::replace(&mut self.len, 0),
            _marker: PhantomData,
        }
    }

    /// Construct elements into the spare slots until the length reaches
    /// `new_len`. The capacity must already be sufficient.
    fn fill_spare_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(new_len <= self.data.capacity());
        let mut insert = Inserter::new(self.data.as_uninit_slice(), self.len);
        for _ in self.len..new_len {
            insert.push(f());
        }
        self.len = insert.complete().1;
    }

    /// Clone `items` into the spare slots. The capacity must already be
    /// sufficient.
    fn clone_into_spare(&mut self, items: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.len + items.len() <= self.data.capacity());
        let mut insert = Inserter::new(self.data.as_uninit_slice(), self.len);
        for item in items {
            insert.push_clone(item);
        }
        self.len = insert.complete().1;
    }
}

impl<T, P: Transfer<T>, G: Grow> Vector<T, P, G> {
    /// Ensure the capacity is at least `capacity`, reallocating to exactly
    /// that size when it is not. Panics on allocation failure.
    #[inline]
    pub fn reserve_to(&mut self, capacity: usize) {
        match self.try_reserve_to(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Ensure the capacity is at least `capacity`, reallocating to exactly
    /// that size when it is not.
    ///
    /// On failure the vector is unchanged. The length and elements are never
    /// affected, and the capacity never decreases.
    pub fn try_reserve_to(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= self.data.capacity() {
            return Ok(());
        }
        let target = RawMemory::try_with_capacity(capacity)?;
        self.relocate(target, None);
        Ok(())
    }

    /// Reserve room for at least `additional` more elements, following the
    /// growth policy `G`. Panics on allocation failure.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        match self.try_reserve(additional) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Reserve room for at least `additional` more elements, following the
    /// growth policy `G`.
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), StorageError> {
        self._try_reserve(additional, false)
    }

    /// Reserve room for exactly `additional` more elements. Panics on
    /// allocation failure.
    #[inline]
    pub fn reserve_exact(&mut self, additional: usize) {
        match self.try_reserve_exact(additional) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Reserve room for exactly `additional` more elements.
    #[inline]
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), StorageError> {
        self._try_reserve(additional, true)
    }

    fn _try_reserve(&mut self, additional: usize, exact: bool) -> Result<(), StorageError> {
        let Some(needed) = self.len.checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        let capacity = self.data.capacity();
        if capacity >= needed {
            return Ok(());
        }
        let capacity = if exact {
            needed
        } else {
            G::next_capacity(capacity, needed)
        };
        self.try_reserve_to(capacity)
    }

    /// Allocate storage able to hold `extra` more elements, following the
    /// growth policy.
    fn try_alloc_grown(&self, extra: usize) -> Result<RawMemory<T>, StorageError> {
        let Some(needed) = self.len.checked_add(extra) else {
            return Err(StorageError::CapacityLimit);
        };
        RawMemory::try_with_capacity(G::next_capacity(self.data.capacity(), needed))
    }

    /// Transfer every live element into `target`, placing `value` at its
    /// index when one is provided, then install `target` as the storage.
    ///
    /// The prefix, the new value and the suffix are written in that order,
    /// so the initialized part of `target` is always a single leading run
    /// which the inserter can release if a fallible transfer panics. Until
    /// `target` is installed the current storage is never modified.
    fn relocate(&mut self, mut target: RawMemory<T>, value: Option<(usize, T)>) {
        let len = self.len;
        let index = match &value {
            Some((index, _)) => *index,
            None => len,
        };
        debug_assert!(index <= len);
        debug_assert!(target.capacity() >= len + usize::from(value.is_some()));

        let src = self.as_slice();
        let mut insert = Inserter::new(target.as_uninit_slice(), 0);
        unsafe {
            P::transfer(&src[..index], insert.spare_mut());
            insert.advance(index);
        }
        if let Some((_, value)) = value {
            insert.push(value);
        }
        unsafe {
            P::transfer(&src[index..], insert.spare_mut());
            insert.advance(len - index);
        }
        let (_, new_len) = insert.complete();

        self.data.swap(&mut target);
        self.len = new_len;
        if !P::INFALLIBLE {
            // The originals were duplicated rather than moved.
            unsafe {
                let old: &mut [T] = slice::from_raw_parts_mut(target.as_mut_ptr(), len);
                ptr::drop_in_place(old);
            }
        }
    }

    /// Append an element to the back of the vector. Panics on allocation
    /// failure.
    #[inline]
    pub fn push(&mut self, value: T) {
        if let Err(error) = self.try_emplace_value(self.len, value) {
            error.panic()
        }
    }

    /// Append an element to the back of the vector, returning the value
    /// inside an error if storage could not be allocated.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), UpdateError<T>> {
        self.try_emplace_value(self.len, value)?;
        Ok(())
    }

    /// Construct an element at the back of the vector, returning a
    /// reference to it. Panics on allocation failure.
    #[inline]
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back(f) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Construct an element at the back of the vector, returning a
    /// reference to it. `f` is not called if storage could not be allocated.
    #[inline]
    pub fn try_emplace_back<F>(&mut self, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        self.try_emplace(self.len, f)
    }

    /// Insert an element at `index`, shifting every following element one
    /// slot towards the back. Returns a reference to the inserted element.
    /// Panics on allocation failure.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert(index, value) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Insert an element at `index`, shifting every following element one
    /// slot towards the back. Returns the value inside an error if storage
    /// could not be allocated.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, UpdateError<T>> {
        self.try_emplace_value(index, value)
    }

    /// Construct an element at `index`, shifting every following element
    /// one slot towards the back. Panics on allocation failure.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace(index, f) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Construct an element at `index`, shifting every following element
    /// one slot towards the back. `f` is not called if storage could not be
    /// allocated, and the vector is unchanged if `f` panics.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn try_emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        if index > self.len {
            index_panic();
        }
        if self.len == self.data.capacity() {
            let target = self.try_alloc_grown(1)?;
            self.relocate(target, Some((index, f())));
        } else {
            let value = f();
            unsafe { self.insert_within_capacity(index, value) };
        }
        Ok(unsafe { self.at_unchecked_mut(index) })
    }

    fn try_emplace_value(&mut self, index: usize, value: T) -> Result<&mut T, UpdateError<T>> {
        if index > self.len {
            index_panic();
        }
        if self.len == self.data.capacity() {
            match self.try_alloc_grown(1) {
                Ok(target) => self.relocate(target, Some((index, value))),
                Err(error) => return Err(UpdateError::new(error, value)),
            }
        } else {
            unsafe { self.insert_within_capacity(index, value) };
        }
        Ok(unsafe { self.at_unchecked_mut(index) })
    }

    /// # Safety
    /// The length must be less than the capacity and `index` must not exceed
    /// the length.
    #[inline]
    unsafe fn insert_within_capacity(&mut self, index: usize, value: T) {
        debug_assert!(self.len < self.data.capacity() && index <= self.len);
        let tail_count = self.len - index;
        let head = self.data.slot_mut(index);
        if tail_count > 0 {
            // Overlapping move of the tail, each slot read before it is overwritten.
            ptr::copy(head, head.add(1), tail_count);
        }
        head.write(value);
        self.len += 1;
    }

    /// Resize to `new_len`, dropping trailing elements or appending default
    /// values. Panics on allocation failure.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resize to `new_len`, dropping trailing elements or appending default
    /// values.
    #[inline]
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), StorageError>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    /// Resize to `new_len`, dropping trailing elements or appending values
    /// produced by `f`. Panics on allocation failure.
    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(new_len, f) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Resize to `new_len`, dropping trailing elements or appending values
    /// produced by `f`. Growing reserves exactly `new_len` slots first;
    /// shrinking never releases capacity.
    pub fn try_resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.len) {
            Ordering::Greater => {
                self.try_reserve_to(new_len)?;
                self.fill_spare_with(new_len, f);
            }
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => (),
        }
        Ok(())
    }

    /// Append clones of every item in `items`. Panics on allocation failure.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Append clones of every item in `items`.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self._try_reserve(items.len(), false)?;
        self.clone_into_spare(items);
        Ok(())
    }

    /// Reallocate to exactly the current length. Panics on allocation
    /// failure.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Reallocate to exactly the current length, releasing the storage
    /// entirely when the vector is empty.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        if self.data.capacity() != self.len {
            let target = RawMemory::try_with_capacity(self.len)?;
            self.relocate(target, None);
        }
        Ok(())
    }
}

impl<T, P, G> AsRef<[T]> for Vector<T, P, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P, G> AsMut<[T]> for Vector<T, P, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P, G> Borrow<[T]> for Vector<T, P, G> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P, G> BorrowMut<[T]> for Vector<T, P, G> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, P, G> Clone for Vector<T, P, G> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Reuse the existing storage when it is large enough, assigning over
    /// the common prefix before dropping or appending the remainder.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.data.capacity() {
            let mut copy = source.clone();
            self.swap_with(&mut copy);
            return;
        }
        self.truncate(source.len);
        let common = self.len;
        self.as_mut_slice().clone_from_slice(&source[..common]);
        self.clone_into_spare(&source[common..]);
    }
}

impl<T, P, G> ConstDefault for Vector<T, P, G> {
    const DEFAULT: Self = Self::new();
}

impl<T: fmt::Debug, P, G> fmt::Debug for Vector<T, P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, P, G> Default for Vector<T, P, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, G> Deref for Vector<T, P, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, P, G> DerefMut for Vector<T, P, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, P, G> Drop for Vector<T, P, G> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, P: Transfer<T>, G: Grow> Extend<T> for Vector<T, P, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a, P: Transfer<T>, G: Grow> Extend<&'a T> for Vector<T, P, G> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, P: Transfer<T>, G: Grow> FromIterator<T> for Vector<T, P, G> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, P: Transfer<T>, G: Grow, const N: usize> From<[T; N]> for Vector<T, P, G> {
    fn from(data: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        let data = ManuallyDrop::new(data);
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), vec.as_mut_ptr(), N);
        }
        vec.len = N;
        vec
    }
}

impl<T: Clone, P, G> From<&[T]> for Vector<T, P, G> {
    fn from(data: &[T]) -> Self {
        let mut vec = Self::with_capacity(data.len());
        vec.clone_into_spare(data);
        vec
    }
}

impl<T: Hash, P, G> Hash for Vector<T, P, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, P, G> IntoIterator for Vector<T, P, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let mut me = ManuallyDrop::new(self);
        let len = mem::replace(&mut me.len, 0);
        IntoIter::new(me.data.take(), len)
    }
}

impl<'a, T, P, G> IntoIterator for &'a Vector<T, P, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, P, G> IntoIterator for &'a mut Vector<T, P, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, P1, G1, T2, P2, G2> PartialEq<Vector<T2, P2, G2>> for Vector<T1, P1, G1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, P2, G2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, P, G> Eq for Vector<T, P, G> {}

impl<T1, P, G, T2> PartialEq<[T2]> for Vector<T1, P, G>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, P, G, T2> PartialEq<&[T2]> for Vector<T1, P, G>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, P, G, T2, const N: usize> PartialEq<[T2; N]> for Vector<T1, P, G>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, P, G, T2, const N: usize> PartialEq<&[T2; N]> for Vector<T1, P, G>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize, P, G> zeroize::Zeroize for Vector<T, P, G> {
    /// Zeroize and drop every element, then wipe the whole storage block
    /// including spare capacity. The capacity is retained.
    fn zeroize(&mut self) {
        for item in self.as_mut_slice() {
            item.zeroize();
        }
        self.clear();
        // SAFETY: no live elements remain.
        unsafe { self.data.zeroize_raw() };
    }
}
