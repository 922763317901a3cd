use core::{alloc, convert, mem};
use core::num::NonZeroUsize;

use crate::error::{EmptyLayoutError, LayoutError};

/// Layout of an allocated block of memory.
///
/// Wraps the `Layout` structure from core and adds the array constructor used by the growth
/// engine, reporting overflow as a [`LayoutError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout(alloc::Layout);

/// A non-empty layout which can be allocated.
///
/// Allocators never see requests for zero bytes. Callers holding an empty layout simply do not
/// allocate and use a dangling pointer instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonZeroLayout(Layout);

impl Layout {
    /// Create the layout of `n` consecutive elements of type `T`.
    ///
    /// Fails when the total size in bytes does not fit into `isize`.
    ///
    /// ```
    /// use array_alloc::Layout;
    ///
    /// assert_eq!(Layout::array::<u32>(16).unwrap().size(), 64);
    /// assert!(Layout::array::<u64>(usize::MAX / 4).is_err());
    /// ```
    pub fn array<T>(n: usize) -> Result<Self, LayoutError> {
        let size = mem::size_of::<T>().checked_mul(n).ok_or(LayoutError)?;
        alloc::Layout::from_size_align(size, mem::align_of::<T>())
            .map(Layout)
            .map_err(|_| LayoutError)
    }

    /// Return the size of the layout.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Return the alignment of the layout.
    pub fn align(&self) -> usize {
        self.0.align()
    }
}

impl NonZeroLayout {
    /// Creates a non-empty layout if the given layout is not empty.
    pub fn from_layout(layout: Layout) -> Option<Self> {
        if layout.size() == 0 {
            None
        } else {
            Some(NonZeroLayout(layout))
        }
    }

    /// The layout of `n` elements of `T`, or `None` if that occupies no bytes.
    ///
    /// This is the layout of an array's allocation. Zero capacity and zero-sized element types
    /// both map to `Ok(None)`, meaning no allocation exists.
    pub fn array<T>(n: usize) -> Result<Option<Self>, LayoutError> {
        Layout::array::<T>(n).map(Self::from_layout)
    }

    /// Return the size of the layout.
    pub fn size(&self) -> NonZeroUsize {
        match NonZeroUsize::new(self.0.size()) {
            Some(size) => size,
            None => unreachable!("checked on construction"),
        }
    }

    /// Return the alignment of the layout.
    pub fn align(&self) -> usize {
        self.0.align()
    }
}

impl From<Layout> for alloc::Layout {
    fn from(layout: Layout) -> alloc::Layout {
        layout.0
    }
}

impl From<NonZeroLayout> for alloc::Layout {
    fn from(layout: NonZeroLayout) -> alloc::Layout {
        layout.0.into()
    }
}

impl convert::TryFrom<Layout> for NonZeroLayout {
    type Error = EmptyLayoutError;

    fn try_from(layout: Layout) -> Result<Self, EmptyLayoutError> {
        NonZeroLayout::from_layout(layout).ok_or(EmptyLayoutError)
    }
}
