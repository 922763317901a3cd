use core::cell::Cell;
use core::ptr::NonNull;

use array_alloc::{AllocError, Global, NonZeroLayout, RawAlloc};

/// Heap allocator that records every call it serves.
#[derive(Default)]
pub struct Counting {
    pub allocations: Cell<usize>,
    pub reallocations: Cell<usize>,
    pub frees: Cell<usize>,
    /// Bytes currently handed out. Goes negative when this instance frees a block that another
    /// instance allocated.
    pub live: Cell<isize>,
    /// Refuse requests larger than this many bytes.
    pub limit: Cell<Option<usize>>,
}

#[allow(dead_code)]
impl Counting {
    pub fn with_limit(bytes: usize) -> Self {
        let counting = Counting::default();
        counting.limit.set(Some(bytes));
        counting
    }

    /// Total calls that may move the block.
    pub fn growths(&self) -> usize {
        self.allocations.get() + self.reallocations.get()
    }

    fn admit(&self, layout: NonZeroLayout) -> Result<(), AllocError> {
        match self.limit.get() {
            Some(limit) if layout.size().get() > limit => Err(AllocError { layout }),
            _ => Ok(()),
        }
    }
}

fn bytes(layout: NonZeroLayout) -> isize {
    layout.size().get() as isize
}

// SAFETY: every instance forwards to the heap, so blocks move freely between instances.
unsafe impl RawAlloc for Counting {
    fn allocate(&self, layout: NonZeroLayout) -> Result<NonNull<u8>, AllocError> {
        self.admit(layout)?;
        let ptr = Global.allocate(layout)?;
        self.allocations.set(self.allocations.get() + 1);
        self.live.set(self.live.get() + bytes(layout));
        Ok(ptr)
    }

    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: NonZeroLayout, new: NonZeroLayout)
        -> Result<NonNull<u8>, AllocError>
    {
        self.admit(new)?;
        let ptr = Global.reallocate(ptr, old, new)?;
        self.reallocations.set(self.reallocations.get() + 1);
        self.live.set(self.live.get() - bytes(old) + bytes(new));
        Ok(ptr)
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: NonZeroLayout) {
        self.frees.set(self.frees.get() + 1);
        self.live.set(self.live.get() - bytes(layout));
        Global.free(ptr, layout)
    }
}
