mod common;

use common::Counting;
use dynamic_array::growth::{capacity_for, DEFAULT_INIT_CAPACITY};
use dynamic_array::DynamicArray;
use quickcheck::{QuickCheck, TestResult};

/// One step of a random workload: push one value, append a run, or pop.
fn apply(
    array: &mut DynamicArray<u16, Counting>,
    alloc: &Counting,
    model: &mut Vec<u16>,
    op: (u8, u16),
) -> bool {
    let (kind, value) = op;
    match kind % 3 {
        0 => {
            array.push_in(alloc, value);
            model.push(value);
            true
        }
        1 => {
            let run = vec![value; usize::from(value % 40)];
            let before = (array.count(), array.capacity(), alloc.growths());
            array.extend_from_slice_in(alloc, &run);
            model.extend_from_slice(&run);

            // At most one allocator call, landing on the doubling sequence.
            let expected = capacity_for::<DEFAULT_INIT_CAPACITY>(before.1, before.0 + run.len());
            alloc.growths() - before.2 <= 1 && Some(array.capacity()) == expected
        }
        _ => array.pop() == model.pop(),
    }
}

#[test]
fn count_bounded_and_capacity_monotonic() {
    fn prop(ops: Vec<(u8, u16)>) -> bool {
        let alloc = Counting::default();
        let mut array = DynamicArray::new();
        let mut model = Vec::new();
        let mut capacity = 0;

        for op in ops {
            if !apply(&mut array, &alloc, &mut model, op) {
                return false;
            }
            if array.count() > array.capacity() || array.capacity() < capacity {
                return false;
            }
            capacity = array.capacity();
        }

        let same = array.as_slice() == model.as_slice();
        array.release_in(&alloc);
        same && alloc.live.get() == 0
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<(u8, u16)>) -> bool);
}

#[test]
fn capacity_is_power_of_two_multiple() {
    fn prop(pushes: u16) -> TestResult {
        if pushes == 0 {
            return TestResult::discard();
        }

        let alloc = Counting::default();
        let mut array: DynamicArray<u8, Counting> = DynamicArray::new();
        for i in 0..pushes {
            array.push_in(&alloc, i as u8);
        }

        let capacity = array.capacity();
        let ok = capacity % DEFAULT_INIT_CAPACITY == 0
            && (capacity / DEFAULT_INIT_CAPACITY).is_power_of_two()
            && capacity / 2 < usize::from(pushes).max(DEFAULT_INIT_CAPACITY);
        array.release_in(&alloc);
        TestResult::from_bool(ok)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16) -> TestResult);
}

#[test]
fn push_then_pop_restores() {
    fn prop(prefix: Vec<i64>, value: i64) -> bool {
        let mut array: DynamicArray<i64> = DynamicArray::new();
        array.extend_from_slice(&prefix);

        let before = array.count();
        array.push(value);
        let popped = array.pop();
        let ok = popped == Some(value) && array.count() == before;
        array.release();
        ok
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<i64>, i64) -> bool);
}
