use core::ptr::NonNull;

use crate::error::AllocError;
use crate::layout::NonZeroLayout;
use crate::util::defaults;

/// A provider of raw memory blocks with sized deallocation.
///
/// All three methods are required together: a block obtained from `allocate` or `reallocate` of
/// an allocator type must only ever be passed back to `reallocate` or `free` of that same type.
/// Containers receive the allocator as a context value on every call and safe code can pass any
/// instance of the type, so the pairing is per type and not per instance.
///
/// Methods take `&self` so that an allocator can be shared by many containers at once. Stateful
/// allocators use interior mutability.
///
/// ```
/// use array_alloc::{Global, NonZeroLayout, RawAlloc};
///
/// let layout = NonZeroLayout::array::<u64>(8).unwrap().unwrap();
/// let (first, second) = (Global, Global);
///
/// let block = first.allocate(layout).unwrap();
/// // Any instance accepts the blocks of any other.
/// unsafe { second.free(block, layout) };
/// ```
///
/// # Safety
///
/// Implementors guarantee that a successful `allocate` or `reallocate` returns a pointer that is
/// valid for reads and writes of **at least** the requested layout, aligned to its alignment, and
/// not aliased by any other live block of an allocator of the same type.
///
/// Every instance of the implementing type must accept, in `reallocate` and `free`, a block that
/// any other instance of the type returned. A per-instance arena or pool can not implement the
/// trait directly. It can implement it for a handle type that only ever refers to one arena, for
/// example a zero-sized marker of a `static` arena.
pub unsafe trait RawAlloc {
    /// Allocate one block of memory.
    ///
    /// The content of the block is uninitialized.
    fn allocate(&self, layout: NonZeroLayout) -> Result<NonNull<u8>, AllocError>;

    /// Change the size of a block previously allocated.
    ///
    /// On success the first `min(old.size(), new.size())` bytes of the returned block hold the
    /// previous content and `ptr` must no longer be used. On failure the old block is untouched
    /// and still owned by the caller.
    ///
    /// The default implementation allocates a new block, copies the prefix and frees the old
    /// block. See [`util::defaults::reallocate`].
    ///
    /// # Safety
    /// The caller must ensure that:
    /// * `ptr` was returned by an allocator of this type and not yet freed.
    /// * `old` is the layout `ptr` was last allocated or reallocated with.
    /// * `new` has the same alignment as `old`.
    ///
    /// [`util::defaults::reallocate`]: crate::util::defaults::reallocate
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: NonZeroLayout, new: NonZeroLayout)
        -> Result<NonNull<u8>, AllocError>
    {
        defaults::reallocate(self, ptr, old, new)
    }

    /// Return a block to the allocator.
    ///
    /// # Safety
    /// The caller must ensure that:
    /// * `ptr` was returned by an allocator of this type and not yet freed.
    /// * `layout` is the layout `ptr` was last allocated or reallocated with.
    /// * There are no more pointers into the block.
    unsafe fn free(&self, ptr: NonNull<u8>, layout: NonZeroLayout);
}

// SAFETY: every reference forwards to an `A`, and any `A` accepts the blocks of any other.
unsafe impl<A> RawAlloc for &'_ A
    where A: RawAlloc + ?Sized
{
    fn allocate(&self, layout: NonZeroLayout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: NonZeroLayout, new: NonZeroLayout)
        -> Result<NonNull<u8>, AllocError>
    {
        (**self).reallocate(ptr, old, new)
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: NonZeroLayout) {
        (**self).free(ptr, layout)
    }
}
