#![cfg(all(feature = "alloc", feature = "zeroize"))]

use core::slice;

use zeroize::Zeroize;

use rawmem_vec::{vector, Vector};

fn raw_bytes<T>(vec: &Vector<T>) -> &[u8] {
    // Only valid once the whole block has been written.
    unsafe {
        slice::from_raw_parts(
            vec.as_ptr().cast::<u8>(),
            vec.capacity() * core::mem::size_of::<T>(),
        )
    }
}

#[test]
fn zeroize_clears_storage() {
    let mut v = Vector::<u32>::with_capacity(8);
    v.extend_from_slice(&[u32::MAX; 5]);
    v.zeroize();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 8);
    assert!(raw_bytes(&v).iter().all(|b| *b == 0));
}

#[test]
fn zeroize_after_truncate() {
    let mut v = vector![0xAAu8; 16];
    v.truncate(4);
    v.zeroize();
    assert_eq!(raw_bytes(&v), &[0u8; 16]);
    v.push(1);
    assert_eq!(v, [1]);
}

#[test]
fn zeroize_nested_elements() {
    let mut v = Vector::<Vector<u8>>::new();
    v.push(vector![1, 2, 3]);
    v.push(vector![4]);
    v.zeroize();
    assert!(v.is_empty());
}

#[test]
fn zeroize_empty() {
    let mut v = Vector::<u64>::new();
    v.zeroize();
    assert_eq!(v.capacity(), 0);
}
