//! The byte-buffer façade, a string builder.
//!
//! A [`StringBuilder`] is nothing but a [`DynamicArray`] of bytes. All array operations apply
//! with the same growth behaviour, this module only adds text-oriented conveniences.
//!
//! ```
//! use array_alloc::Global;
//! use dynamic_array::StringBuilder;
//!
//! let mut sb: StringBuilder = StringBuilder::new();
//! sb.push_str_in(&Global, "hello");
//! sb.push_nul_in(&Global);
//!
//! let owned = sb.duplicate_nul_terminated_in(&Global);
//! assert_eq!(owned.as_bytes(), b"hello\0\0");
//!
//! owned.release_in(&Global);
//! sb.release_in(&Global);
//! ```
//!
//! [`DynamicArray`]: ../struct.DynamicArray.html
use core::ffi::CStr;
use core::{fmt, str};

use array_alloc::{Global, RawAlloc};

use crate::array::DynamicArray;
use crate::error::{handle_grow_error, GrowError};

/// A growable byte buffer.
pub type StringBuilder<A = Global, const INIT: usize = 16> = DynamicArray<u8, A, INIT>;

/// Appends formatted text to a byte buffer.
///
/// Created by [`DynamicArray::writer`]. Allocation failure is reported as `fmt::Error`.
///
/// ```
/// use core::fmt::Write;
/// use array_alloc::Global;
/// use dynamic_array::StringBuilder;
///
/// let mut sb: StringBuilder = StringBuilder::new();
/// write!(sb.writer(&Global), "{}-{:02}", 7, 3).unwrap();
/// assert_eq!(sb.to_str(), Ok("7-03"));
/// # sb.release_in(&Global);
/// ```
///
/// [`DynamicArray::writer`]: ../struct.DynamicArray.html#method.writer
pub struct Writer<'a, A, const INIT: usize = 16> {
    buffer: &'a mut DynamicArray<u8, A, INIT>,
    alloc: &'a A,
}

impl<A, const INIT: usize> DynamicArray<u8, A, INIT> {
    /// The live bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    /// The live bytes as text, if they are valid UTF-8.
    pub fn to_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(self.as_slice())
    }
}

impl<A: RawAlloc, const INIT: usize> DynamicArray<u8, A, INIT> {
    /// Appends a single zero byte.
    ///
    /// It counts as a live byte like any other, so later appends go after it.
    pub fn push_nul_in(&mut self, alloc: &A) {
        self.push_in(alloc, 0);
    }

    /// Appends raw bytes, reallocating at most once.
    pub fn push_bytes_in(&mut self, alloc: &A, bytes: &[u8]) {
        self.extend_from_slice_in(alloc, bytes)
    }

    /// Appends raw bytes, reallocating at most once and reporting failure.
    pub fn try_push_bytes_in(&mut self, alloc: &A, bytes: &[u8]) -> Result<(), GrowError> {
        self.try_extend_from_slice_in(alloc, bytes)
    }

    /// Appends the bytes of `text`.
    pub fn push_str_in(&mut self, alloc: &A, text: &str) {
        self.push_bytes_in(alloc, text.as_bytes())
    }

    /// Appends the bytes of a C string, without its terminator.
    pub fn push_cstr_in(&mut self, alloc: &A, text: &CStr) {
        self.push_bytes_in(alloc, text.to_bytes())
    }

    /// Copy the live bytes into a new block of `count + 1` bytes, the last one zero.
    ///
    /// The terminator is always added, also when the buffer already ends in a zero byte.
    /// Aborts on allocation failure.
    pub fn duplicate_nul_terminated_in(&self, alloc: &A) -> Self {
        match self.try_duplicate_nul_terminated_in(alloc) {
            Ok(copy) => copy,
            Err(err) => handle_grow_error(err),
        }
    }

    /// Copy the live bytes and a terminating zero into a new block, reporting failure.
    pub fn try_duplicate_nul_terminated_in(&self, alloc: &A) -> Result<Self, GrowError> {
        let len = self.count()
            .checked_add(1)
            .ok_or(GrowError::CapacityOverflow)?;
        let mut copy = Self::try_with_capacity_in(alloc, len)?;
        unsafe {
            // SAFETY: allocated room for the bytes and one terminator.
            copy.extend_unchecked(self.as_slice());
            copy.push_unchecked(0);
        }
        Ok(copy)
    }

    /// Borrow the buffer for `write!` and friends.
    pub fn writer<'a>(&'a mut self, alloc: &'a A) -> Writer<'a, A, INIT> {
        Writer { buffer: self, alloc }
    }
}

impl<const INIT: usize> DynamicArray<u8, Global, INIT> {
    /// Appends a zero byte, growing on the heap.
    pub fn push_nul(&mut self) {
        self.push_nul_in(&Global)
    }

    /// Appends the bytes of `text`, growing on the heap.
    pub fn push_str(&mut self, text: &str) {
        self.push_str_in(&Global, text)
    }

    /// Copy the live bytes and a terminating zero into a new heap block.
    pub fn duplicate_nul_terminated(&self) -> Self {
        self.duplicate_nul_terminated_in(&Global)
    }
}

impl<A: RawAlloc, const INIT: usize> fmt::Write for Writer<'_, A, INIT> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.buffer
            .try_push_bytes_in(self.alloc, text.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_terminators() {
        let mut sb: StringBuilder = StringBuilder::new();
        sb.push_str("hello");
        assert_eq!(sb.count(), 5);
        sb.push_nul();
        assert_eq!(sb.as_bytes(), b"hello\0");

        let owned = sb.duplicate_nul_terminated();
        assert_eq!(owned.as_bytes(), b"hello\0\0");
        assert_eq!(owned.count(), 7);
        assert_eq!(owned.capacity(), 7);

        owned.release();
        sb.release();
    }

    #[test]
    fn empty_duplicate_is_terminator() {
        let sb: StringBuilder = StringBuilder::new();
        let owned = sb.duplicate_nul_terminated();
        assert_eq!(owned.as_bytes(), [0]);
        owned.release();
    }

    #[test]
    fn c_strings() {
        let mut sb: StringBuilder = StringBuilder::new();
        let text = CStr::from_bytes_with_nul(b"abc\0").unwrap();
        sb.push_cstr_in(&Global, text);
        assert_eq!(sb.as_bytes(), b"abc");
        sb.release();
    }

    #[test]
    fn formatted() {
        use core::fmt::Write;

        let mut sb: StringBuilder = StringBuilder::new();
        sb.push_str("x=");
        write!(sb.writer(&Global), "{}", 42).unwrap();
        assert_eq!(sb.to_str(), Ok("x=42"));

        sb.push(0xff);
        assert!(sb.to_str().is_err());
        sb.release();
    }
}
