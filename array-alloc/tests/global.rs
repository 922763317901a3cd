use core::cell::Cell;
use core::ptr::NonNull;

use array_alloc::{AllocError, Global, NonZeroLayout, RawAlloc};

/// Forwards to the heap but keeps the default, moving `reallocate`.
#[derive(Default)]
struct Moving {
    allocations: Cell<usize>,
    frees: Cell<usize>,
}

unsafe impl RawAlloc for Moving {
    fn allocate(&self, layout: NonZeroLayout) -> Result<NonNull<u8>, AllocError> {
        self.allocations.set(self.allocations.get() + 1);
        Global.allocate(layout)
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: NonZeroLayout) {
        self.frees.set(self.frees.get() + 1);
        Global.free(ptr, layout)
    }
}

fn layout_of<T>(n: usize) -> NonZeroLayout {
    NonZeroLayout::array::<T>(n).unwrap().unwrap()
}

#[test]
fn heap_roundtrip() {
    let small = layout_of::<u32>(4);
    let large = layout_of::<u32>(8);

    let ptr = Global.allocate(small).unwrap().cast::<u32>();
    unsafe {
        for i in 0..4 {
            ptr.as_ptr().add(i).write(i as u32);
        }

        let grown = Global.reallocate(ptr.cast(), small, large).unwrap().cast::<u32>();
        for i in 0..4 {
            assert_eq!(grown.as_ptr().add(i).read(), i as u32);
        }

        Global.free(grown.cast(), large);
    }
}

#[test]
fn default_reallocate_moves() {
    let alloc = Moving::default();
    let small = layout_of::<u8>(3);
    let large = layout_of::<u8>(16);

    let ptr = alloc.allocate(small).unwrap();
    unsafe {
        ptr.as_ptr().copy_from_nonoverlapping(b"abc".as_ptr(), 3);
        let grown = alloc.reallocate(ptr, small, large).unwrap();
        assert_eq!(core::slice::from_raw_parts(grown.as_ptr(), 3), b"abc");
        alloc.free(grown, large);
    }

    assert_eq!(alloc.allocations.get(), 2);
    assert_eq!(alloc.frees.get(), 2);
}

#[test]
fn by_reference() {
    fn allocate_with(alloc: impl RawAlloc) {
        let layout = layout_of::<u64>(1);
        let ptr = alloc.allocate(layout).unwrap();
        unsafe { alloc.free(ptr, layout) };
    }

    let alloc = Moving::default();
    allocate_with(&alloc);
    allocate_with(&&alloc);
    assert_eq!(alloc.allocations.get(), 2);
    assert_eq!(alloc.frees.get(), 2);
}

#[test]
fn error_message() {
    let err = AllocError { layout: layout_of::<u16>(8) };
    assert_eq!(err.to_string(), "memory allocation of 16 bytes failed");
}
