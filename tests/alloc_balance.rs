//! Allocation accounting through a counting global allocator which can be
//! told to refuse requests from the current thread.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rawmem_vec::{CloneInto, StorageError, Vector};

thread_local! {
    static ALLOCS: Cell<usize> = const { Cell::new(0) };
    static LIVE_BLOCKS: Cell<isize> = const { Cell::new(0) };
    static FAIL: Cell<bool> = const { Cell::new(false) };
    static CLONE_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

struct Counting;

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // Thread locals may already be torn down while a thread exits.
        let fail = FAIL.try_with(Cell::get).unwrap_or(false);
        if fail {
            return std::ptr::null_mut();
        }
        let _ = ALLOCS.try_with(|c| c.set(c.get() + 1));
        let _ = LIVE_BLOCKS.try_with(|c| c.set(c.get() + 1));
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE_BLOCKS.try_with(|c| c.set(c.get() - 1));
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn allocs() -> usize {
    ALLOCS.with(Cell::get)
}

fn live_blocks() -> isize {
    LIVE_BLOCKS.with(Cell::get)
}

/// Run `f` with every allocation on this thread refused.
fn failing<R>(f: impl FnOnce() -> R) -> R {
    FAIL.with(|c| c.set(true));
    let res = f();
    FAIL.with(|c| c.set(false));
    res
}

/// An element whose `clone` panics once the clone budget is spent.
#[derive(Debug)]
struct Brittle(usize);

impl Clone for Brittle {
    fn clone(&self) -> Self {
        CLONE_BUDGET.with(|b| match b.get() {
            Some(0) => {
                b.set(None);
                panic!("clone refused");
            }
            Some(n) => b.set(Some(n - 1)),
            None => (),
        });
        Brittle(self.0)
    }
}

/// Unwinding allocates lazily the first time on each thread (the captured
/// output buffer, for one), so panic once before taking a baseline.
fn settle_panic_allocations() {
    let res = catch_unwind(|| panic!("settle"));
    assert!(res.is_err());
}

#[test]
fn operations_release_storage() {
    let start = live_blocks();
    {
        let mut v = Vector::<usize>::new();
        for i in 0..100 {
            v.push(i);
        }
        v.insert(50, 7);
        v.reserve_to(400);
        v.shrink_to_fit();
        let mut copy = v.clone();
        copy.clone_from(&Vector::from([1, 2, 3]));
        v.swap_with(&mut copy);
        let iter = copy.into_iter();
        assert_eq!(iter.len(), 101);
        assert_eq!(live_blocks(), start + 2);
    }
    assert_eq!(live_blocks(), start);
}

#[test]
fn empty_vectors_do_not_allocate() {
    let start = allocs();
    let mut v = Vector::<u64>::new();
    v.reserve_to(0);
    v.resize(0);
    let copy = v.clone();
    let sized = Vector::<u64>::with_capacity(0);
    assert_eq!(allocs(), start);
    drop((v, copy, sized));
}

#[test]
fn growth_allocations_are_logarithmic() {
    let mut v = Vector::<usize>::new();
    let start = allocs();
    for i in 0..1000 {
        v.push(i);
    }
    // Capacities 1, 2, 4, ... 1024.
    assert_eq!(allocs() - start, 11);
    assert_eq!(v.capacity(), 1024);
}

#[test]
fn shrink_empty_releases_block() {
    let start = live_blocks();
    let mut v = Vector::<usize>::with_capacity(16);
    assert_eq!(live_blocks(), start + 1);
    v.shrink_to_fit();
    assert_eq!(live_blocks(), start);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn failed_push_returns_value() {
    let mut v = Vector::<String>::with_capacity(2);
    v.push("a".to_string());
    v.push("b".to_string());
    let ptr = v.as_ptr();
    let value = "c".to_string();

    let res = failing(|| v.try_push(value));
    let err = res.expect_err("push should fail");
    assert!(matches!(err.error(), StorageError::AllocError(_)));
    assert_eq!(err.into_value(), "c");
    assert_eq!(v, ["a", "b"]);
    assert_eq!(v.capacity(), 2);
    assert_eq!(v.as_ptr(), ptr);

    v.push("c".to_string());
    assert_eq!(v, ["a", "b", "c"]);
}

#[test]
fn failed_insert_returns_value() {
    let mut v = Vector::<usize, CloneInto>::from([1, 2, 3]);
    let res = failing(|| v.try_insert(1, 9).map(|_| ()));
    assert_eq!(res.map_err(|err| err.into_value()), Err(9));
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn failed_emplace_skips_constructor() {
    let mut v = Vector::<usize>::from([1]);
    let mut called = false;
    let res = failing(|| {
        v.try_emplace_back(|| {
            called = true;
            2
        })
        .map(|_| ())
    });
    assert!(res.is_err());
    assert!(!called);
    assert_eq!(v, [1]);
}

#[test]
fn failed_reserve_is_unchanged() {
    let mut v = Vector::<usize, CloneInto>::from([4, 5, 6]);
    let start = live_blocks();
    let res = failing(|| v.try_reserve_to(100));
    assert!(matches!(res, Err(StorageError::AllocError(_))));
    assert_eq!(v, [4, 5, 6]);
    assert_eq!(v.capacity(), 3);
    assert_eq!(live_blocks(), start);
}

#[test]
fn failed_resize_is_unchanged() {
    let mut v = Vector::<usize>::from([4, 5, 6]);
    let res = failing(|| v.try_resize(10));
    assert!(res.is_err());
    assert_eq!(v, [4, 5, 6]);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn failed_clone_and_construct() {
    let v = Vector::<usize>::from([1, 2]);
    let res = failing(|| v.try_clone().map(|_| ()));
    assert!(res.is_err());
    let res = failing(|| Vector::<usize>::try_with_capacity(4).map(|_| ()));
    assert!(res.is_err());
    let res = failing(|| Vector::<usize>::try_with_len(4).map(|_| ()));
    assert!(res.is_err());
    assert_eq!(v, [1, 2]);
}

#[test]
fn failed_shrink_keeps_storage() {
    let mut v = Vector::<usize>::with_capacity(8);
    v.extend_from_slice(&[1, 2]);
    let res = failing(|| v.try_shrink_to_fit());
    assert!(res.is_err());
    assert_eq!(v.capacity(), 8);
    assert_eq!(v, [1, 2]);
}

#[test]
fn panicking_clone_releases_new_block() {
    settle_panic_allocations();
    let mut v = Vector::<Brittle, CloneInto>::with_capacity(4);
    for i in 0..4 {
        v.push(Brittle(i));
    }
    let start = live_blocks();

    CLONE_BUDGET.with(|b| b.set(Some(2)));
    let res = catch_unwind(AssertUnwindSafe(|| v.reserve_to(32)));
    assert!(res.is_err());
    // The panic payload is itself a heap block.
    drop(res);
    assert_eq!(live_blocks(), start);
    assert_eq!(v.capacity(), 4);

    // At full capacity, so the insert reallocates and fails in the suffix.
    CLONE_BUDGET.with(|b| b.set(Some(2)));
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.insert(1, Brittle(9));
    }));
    assert!(res.is_err());
    drop(res);
    assert_eq!(live_blocks(), start);
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.len(), 4);
    assert_eq!(v.iter().map(|b| b.0).collect::<Vec<_>>(), [0, 1, 2, 3]);
}
