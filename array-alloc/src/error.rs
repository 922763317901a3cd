use thiserror::Error;

use crate::layout::NonZeroLayout;

/// An allocator could not provide a block for the requested layout.
///
/// The allocator reports this instead of returning a null pointer. What a caller does with it is
/// its own policy: the checked operations of an array forward it, the infallible ones abort.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("memory allocation of {} bytes failed", .layout.size())]
pub struct AllocError {
    /// The layout that was requested.
    pub layout: NonZeroLayout,
}

/// The size of a requested array layout overflows.
#[derive(Clone, Copy, Debug, Error, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[error("array layout exceeds the maximum allocation size")]
pub struct LayoutError;

/// A zero-sized layout where a block of memory was required.
#[derive(Clone, Copy, Debug, Error, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[error("layout of zero bytes can not be allocated")]
pub struct EmptyLayoutError;
