use core::ptr::NonNull;

use crate::{AllocError, NonZeroLayout, RawAlloc};

/// The platform heap, through `alloc::alloc`.
///
/// This is the default allocator of arrays. It never needs a context value of its own, so the
/// unit struct itself is the context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl RawAlloc for Global {
    fn allocate(&self, layout: NonZeroLayout) -> Result<NonNull<u8>, AllocError> {
        // SAFETY: the layout is not empty due to `NonZeroLayout`.
        let ptr = unsafe { alloc::alloc::alloc(layout.into()) };
        from_global_ptr(ptr, layout)
    }

    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: NonZeroLayout, new: NonZeroLayout)
        -> Result<NonNull<u8>, AllocError>
    {
        // We can't change the alignment, sadly.
        if new.align() != old.align() {
            return Err(AllocError { layout: new });
        }

        // SAFETY: all preconditions have been propagated. The new size was validated against
        // `isize::MAX` by constructing `new` through `core::alloc::Layout`.
        let raw = alloc::alloc::realloc(ptr.as_ptr(), old.into(), new.size().get());
        from_global_ptr(raw, new)
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: NonZeroLayout) {
        // SAFETY: all preconditions have been propagated.
        alloc::alloc::dealloc(ptr.as_ptr(), layout.into())
    }
}

fn from_global_ptr(ptr: *mut u8, layout: NonZeroLayout) -> Result<NonNull<u8>, AllocError> {
    NonNull::new(ptr).ok_or(AllocError { layout })
}
