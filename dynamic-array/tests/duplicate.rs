mod common;

use common::Counting;
use dynamic_array::{DynamicArray, StringBuilder};

#[test]
fn duplicate_is_exact_and_independent() {
    let alloc = Counting::default();
    let mut array: DynamicArray<u32, Counting> = DynamicArray::new();
    array.extend_from_slice_in(&alloc, &[1, 2, 3]);

    let mut copy = array.duplicate_in(&alloc);
    assert_eq!(copy.as_slice(), [1, 2, 3]);
    assert_eq!(copy.capacity(), 3);
    assert_eq!(alloc.allocations.get(), 2);

    array.as_mut_slice()[0] = 100;
    array.push_in(&alloc, 4);
    copy.as_mut_slice()[2] = 300;

    assert_eq!(array.as_slice(), [100, 2, 3, 4]);
    assert_eq!(copy.as_slice(), [1, 2, 300]);

    copy.release_in(&alloc);
    array.release_in(&alloc);
    assert_eq!(alloc.frees.get(), 2);
    assert_eq!(alloc.live.get(), 0);
}

#[test]
fn duplicate_clones_owned_values() {
    let mut names: DynamicArray<String> = DynamicArray::new();
    names.push("left".to_string());
    names.push("right".to_string());

    let copy = names.duplicate();
    names.as_mut_slice()[0].push_str("-changed");

    assert_eq!(copy.as_slice(), ["left", "right"]);
    copy.release();
    names.release();
}

#[test]
fn duplicate_of_empty_does_not_allocate() {
    let alloc = Counting::default();
    let array: DynamicArray<u32, Counting> = DynamicArray::with_capacity_in(&alloc, 4);
    let copy = array.duplicate_in(&alloc);
    assert_eq!(copy.capacity(), 0);
    assert_eq!(alloc.allocations.get(), 1);
    copy.release_in(&alloc);
    array.release_in(&alloc);
}

#[test]
fn terminator_always_appended() {
    let alloc = Counting::default();
    let mut sb: StringBuilder<Counting> = StringBuilder::new();
    sb.push_str_in(&alloc, "hello");
    sb.push_nul_in(&alloc);
    assert_eq!(sb.count(), 6);

    let owned = sb.duplicate_nul_terminated_in(&alloc);
    assert_eq!(owned.as_bytes(), b"hello\0\0");
    assert_eq!(owned.count(), 7);

    sb.push_str_in(&alloc, "!");
    assert_eq!(owned.as_bytes(), b"hello\0\0");

    owned.release_in(&alloc);
    sb.release_in(&alloc);
    assert_eq!(alloc.live.get(), 0);
}

#[test]
fn builder_grows_like_any_array() {
    let alloc = Counting::default();
    let mut sb: StringBuilder<Counting> = StringBuilder::new();
    let line = "0123456789";
    for _ in 0..5 {
        sb.push_str_in(&alloc, line);
    }

    assert_eq!(sb.count(), 50);
    assert_eq!(sb.capacity(), 64);
    assert_eq!(alloc.growths(), 3);
    sb.release_in(&alloc);
}
