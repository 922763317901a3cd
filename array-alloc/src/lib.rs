//! The allocator interface of `dynamic-array`.
//!
//! A growable array needs exactly three things from its memory provider: a fresh block, a bigger
//! block that keeps the old prefix, and a way to hand a block back. The [`RawAlloc`] trait asks
//! for those three primitives and, unlike `core::alloc::GlobalAlloc`, always passes the size of
//! the block being resized or freed. That makes it easy to implement for static arenas, pools and
//! counting wrappers that do not keep their own bookkeeping. Blocks belong to the allocator type,
//! any instance of it may grow or free them.
//!
//! The allocator is not a global singleton. It is a context value passed by reference to every
//! operation that may allocate, so one program can hold arrays backed by different providers.
//!
//! [`Global`] forwards to the platform heap and is the default used by [`dynamic-array`].
//!
//! ```rust
//! use array_alloc::{Global, Layout, NonZeroLayout, RawAlloc};
//!
//! let layout = NonZeroLayout::from_layout(Layout::array::<u32>(4).unwrap()).unwrap();
//! let ptr = Global.allocate(layout).unwrap();
//! unsafe { Global.free(ptr, layout) };
//! ```
//!
//! [`dynamic-array`]: https://crates.io/crates/dynamic-array
#![no_std]
#![deny(missing_docs)]
extern crate alloc;

mod error;
mod global;
mod layout;
mod raw;
pub mod util;

pub use crate::error::{AllocError, EmptyLayoutError, LayoutError};
pub use crate::global::Global;
pub use crate::layout::{Layout, NonZeroLayout};
pub use crate::raw::RawAlloc;
