//! Various utilities such as default implementations.

/// Implementations of default items of traits.
///
/// It is expected that these might be used as a fallback 'super' call of sorts on trait
/// implementors, for example by an allocator that can only grow in place under some conditions.
pub mod defaults {
    use core::cmp;
    use core::ptr::{copy_nonoverlapping, NonNull};

    use crate::{AllocError, NonZeroLayout, RawAlloc};

    /// Change the size of a block by moving it.
    ///
    /// See [`RawAlloc::reallocate`] for more information. This only uses the `allocate` and `free`
    /// methods: a new block is allocated, the common prefix copied, and the old block freed. When
    /// the allocation fails the old block is left untouched.
    ///
    /// # Safety
    /// See the trait.
    ///
    /// [`RawAlloc::reallocate`]: ../../trait.RawAlloc.html#method.reallocate
    pub unsafe fn reallocate<Alloc>(
        this: &Alloc,
        ptr: NonNull<u8>,
        old: NonZeroLayout,
        new: NonZeroLayout,
    ) -> Result<NonNull<u8>, AllocError>
    where
        Alloc: RawAlloc + ?Sized,
    {
        let new_ptr = this.allocate(new)?;
        copy_nonoverlapping(
            ptr.as_ptr(),
            new_ptr.as_ptr(),
            cmp::min(old.size(), new.size()).get());
        this.free(ptr, old);
        Ok(new_ptr)
    }
}
