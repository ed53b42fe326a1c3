// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

mod serde;

use crate::case::{to_lower, to_upper};
use crate::decode::{CodePoints, code_points};
use crate::error::{LengthError, Utf8Error};

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter, Write};
use core::hash::{Hash, Hasher};
use core::iter::Copied;
use core::ops::Deref;
use core::slice;
use core::str::{self, FromStr};

#[cfg(feature = "alloc")]
use {
	alloc::ffi::CString,
	alloc::vec::Vec,
};

#[cfg(feature = "std")]
use std::io;

/// Null-terminated text buffer with a fixed capacity.
///
/// This is the owned counterpart to the null-terminated buffers accepted by [`to_upper`] and [`to_lower`].
/// The contents are always followed by a null octet, which is counted by `N`: a buffer of `N` octets holds at most `N - 1` octets of text.
/// Null octets are never part of the contents -- any input is cut off at its first null octet, as with C strings.
///
/// The contents are meant to be UTF-8 but are not required to be.
/// See [`to_str`](Self::to_str) for a checked view.
///
/// # Examples
///
/// ```rust
/// use stepstr::TextBuf;
///
/// let mut s = TextBuf::<0x10>::from_bytes(b"Caf\xC3\xA9").unwrap();
///
/// s.make_uppercase();
/// assert_eq!(s, "CAF\u{00C9}");
///
/// s.make_lowercase();
/// assert_eq!(s.as_bytes_with_nul(), b"caf\xC3\xA9\0");
/// ```
#[derive(Clone, Copy)]
pub struct TextBuf<const N: usize> {
	len: usize,
	buf: [u8; N],
}

impl<const N: usize> TextBuf<N> {
	/// Constructs a new, empty buffer.
	///
	/// # Panics
	///
	/// Using a value of zero for `N` will result in a compile-time panic, as no room would be left for the terminator.
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		const { assert!(N > 0x0, "cannot construct text buffer without room for terminator") };

		Self {
			len: 0x0,
			buf: [0x00; N],
		}
	}

	/// Constructs a new buffer from octets.
	///
	/// Only octets up to the first null octet (if any) are copied.
	///
	/// # Errors
	///
	/// If the buffer cannot contain the octets, then an error is returned.
	#[inline]
	pub const fn from_bytes(bytes: &[u8]) -> Result<Self, LengthError> {
		let mut this = Self::new();

		if let Err(e) = this.push_bytes(bytes) {
			return Err(e);
		}

		Ok(this)
	}

	/// Pushes a single octet into the buffer.
	///
	/// Pushing a null octet does nothing.
	///
	/// # Errors
	///
	/// If the buffer is full, then an error is returned.
	#[inline]
	pub const fn push(&mut self, octet: u8) -> Result<(), LengthError> {
		if octet == 0x00 {
			return Ok(());
		}

		let remaining = self.remaining();

		if remaining == 0x0 {
			return Err(LengthError {
				remaining,
				count: 0x1,
			});
		}

		self.buf[self.len] = octet;

		self.len += 0x1;
		self.buf[self.len] = 0x00;

		Ok(())
	}

	/// Pushes octets into the buffer.
	///
	/// Only octets up to the first null octet (if any) are pushed.
	///
	/// # Errors
	///
	/// If the buffer cannot contain all of the octets, then an error is returned and the buffer is left unchanged.
	#[inline]
	pub const fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), LengthError> {
		let count     = nul_position(bytes);
		let remaining = self.remaining();

		if count > remaining {
			return Err(LengthError { remaining, count });
		}

		let mut i = 0x0;
		while i < count {
			self.buf[self.len + i] = bytes[i];
			i += 0x1;
		}

		self.len += count;
		self.buf[self.len] = 0x00;

		debug_assert!(self.len < N);

		Ok(())
	}

	/// Pushes a string into the buffer.
	///
	/// See [`push_bytes`](Self::push_bytes).
	///
	/// # Errors
	///
	/// If the buffer cannot contain the string, then an error is returned and the buffer is left unchanged.
	#[inline(always)]
	pub const fn push_str(&mut self, s: &str) -> Result<(), LengthError> {
		self.push_bytes(s.as_bytes())
	}

	/// Truncates the buffer to the specified length.
	///
	/// If `len` is not less than the current length, then this method does nothing.
	/// Note that truncation may split a multi-octet sequence.
	#[inline]
	pub const fn truncate(&mut self, len: usize) {
		if len < self.len {
			self.len = len;
			self.buf[len] = 0x00;
		}
	}

	/// Completely clears the buffer.
	#[inline(always)]
	pub const fn clear(&mut self) {
		self.truncate(0x0);
	}

	/// Converts the contents to uppercase in place.
	///
	/// See [`to_upper`] for which characters are converted.
	#[inline(always)]
	pub const fn make_uppercase(&mut self) {
		to_upper(&mut self.buf);
	}

	/// Converts the contents to lowercase in place.
	///
	/// See [`to_lower`] for which characters are converted.
	#[inline(always)]
	pub const fn make_lowercase(&mut self) {
		to_lower(&mut self.buf);
	}

	/// Returns the current length of the contents.
	///
	/// This does not count the null terminator.
	#[inline(always)]
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Checks if the buffer is empty.
	#[inline(always)]
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0x0
	}

	/// Returns the total amount of octets the buffer can hold, not counting the null terminator.
	#[inline(always)]
	#[must_use]
	pub const fn capacity(&self) -> usize {
		N - 0x1
	}

	/// Returns the amount of octets that can still be pushed.
	#[inline(always)]
	#[must_use]
	pub const fn remaining(&self) -> usize {
		self.capacity() - self.len()
	}

	/// Borrows the contents as a byte slice.
	///
	/// The null terminator is not included.
	#[inline(always)]
	#[must_use]
	pub const fn as_bytes(&self) -> &[u8] {
		self.buf.split_at(self.len).0
	}

	/// Borrows the contents as a byte slice, including the null terminator.
	#[inline(always)]
	#[must_use]
	pub const fn as_bytes_with_nul(&self) -> &[u8] {
		self.buf.split_at(self.len + 0x1).0
	}

	/// Borrows the contents as a string slice.
	///
	/// # Errors
	///
	/// If the contents are not valid UTF-8, then an error naming the first invalid octet is returned.
	#[inline]
	pub const fn to_str(&self) -> Result<&str, Utf8Error> {
		match str::from_utf8(self.as_bytes()) {
			Ok(s) => Ok(s),

			Err(e) => {
				let i = e.valid_up_to();
				let c = self.buf[i];

				Err(Utf8Error { value: c, index: i })
			}
		}
	}

	/// Decodes the contents into code points.
	///
	/// See [`code_points`](crate::decode::code_points) for how malformed contents are reported.
	#[inline(always)]
	pub fn code_points(&self) -> CodePoints<Copied<slice::Iter<'_, u8>>> {
		code_points(self.as_bytes().iter().copied())
	}

	/// Destructs the buffer into its raw parts.
	///
	/// The octet at the index of the returned length is always null.
	#[inline(always)]
	#[must_use]
	pub const fn into_raw_parts(self) -> ([u8; N], usize) {
		let Self { buf, len } = self;
		(buf, len)
	}

	/// Converts the buffer into a vector of its contents.
	///
	/// The null terminator is not included.
	#[cfg(feature = "alloc")]
	#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
	#[inline(always)]
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.as_bytes().into()
	}

	/// Converts the buffer into an owned C string.
	#[cfg(feature = "alloc")]
	#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
	#[inline]
	#[must_use]
	pub fn into_c_string(self) -> CString {
		let data = self.as_bytes_with_nul().into();

		// SAFETY: The contents never contain null octets
		// and are always followed by exactly one.
		unsafe { CString::from_vec_with_nul_unchecked(data) }
	}
}

impl<const N: usize> AsRef<[u8]> for TextBuf<N> {
	#[inline(always)]
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl<const N: usize> Borrow<[u8]> for TextBuf<N> {
	#[inline(always)]
	fn borrow(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl<const N: usize> Debug for TextBuf<N> {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "\"{}\"", self.as_bytes().escape_ascii())
	}
}

impl<const N: usize> Default for TextBuf<N> {
	#[inline(always)]
	fn default() -> Self {
		Self::new()
	}
}

impl<const N: usize> Deref for TextBuf<N> {
	type Target = [u8];

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		self.as_bytes()
	}
}

/// Invalid UTF-8 sequences are written as U+FFFD.
impl<const N: usize> Display for TextBuf<N> {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		for chunk in self.as_bytes().utf8_chunks() {
			f.write_str(chunk.valid())?;

			if !chunk.invalid().is_empty() {
				f.write_char(char::REPLACEMENT_CHARACTER)?;
			}
		}

		Ok(())
	}
}

impl<const N: usize> Eq for TextBuf<N> { }

/// Collects octets until the buffer is full.
impl<const N: usize> FromIterator<u8> for TextBuf<N> {
	#[inline]
	fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
		let mut this = Self::new();

		for octet in iter {
			if this.push(octet).is_err() {
				break;
			}
		}

		this
	}
}

impl<const N: usize> FromStr for TextBuf<N> {
	type Err = LengthError;

	#[inline]
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_bytes(s.as_bytes())
	}
}

impl<const N: usize> Hash for TextBuf<N> {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_bytes().hash(state);
	}
}

impl<const N: usize> Ord for TextBuf<N> {
	#[inline(always)]
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_bytes().cmp(other.as_bytes())
	}
}

impl<const N: usize, const M: usize> PartialEq<TextBuf<M>> for TextBuf<N> {
	#[inline(always)]
	fn eq(&self, other: &TextBuf<M>) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl<const N: usize> PartialEq<[u8]> for TextBuf<N> {
	#[inline(always)]
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

impl<const N: usize> PartialEq<&[u8]> for TextBuf<N> {
	#[inline(always)]
	fn eq(&self, other: &&[u8]) -> bool {
		self.as_bytes() == *other
	}
}

impl<const N: usize> PartialEq<str> for TextBuf<N> {
	#[inline(always)]
	fn eq(&self, other: &str) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl<const N: usize> PartialEq<&str> for TextBuf<N> {
	#[inline(always)]
	fn eq(&self, other: &&str) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl<const N: usize, const M: usize> PartialOrd<TextBuf<M>> for TextBuf<N> {
	#[inline(always)]
	fn partial_cmp(&self, other: &TextBuf<M>) -> Option<Ordering> {
		Some(self.as_bytes().cmp(other.as_bytes()))
	}
}

impl<const N: usize> TryFrom<&[u8]> for TextBuf<N> {
	type Error = LengthError;

	#[inline(always)]
	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl<const N: usize> TryFrom<&str> for TextBuf<N> {
	type Error = LengthError;

	#[inline(always)]
	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::from_bytes(value.as_bytes())
	}
}

/// Writes as many octets as fit.
///
/// Null octets are consumed without being stored.
/// Once the buffer is full, writes consume nothing, which [`write_all`](io::Write::write_all) reports as [`WriteZero`](io::ErrorKind::WriteZero).
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<const N: usize> io::Write for TextBuf<N> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut count = 0x0;

		for &octet in buf {
			if self.push(octet).is_err() {
				break;
			}

			count += 0x1;
		}

		Ok(count)
	}

	#[inline(always)]
	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// See [`into_vec`](TextBuf::into_vec).
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<const N: usize> From<TextBuf<N>> for Vec<u8> {
	#[inline(always)]
	fn from(value: TextBuf<N>) -> Self {
		value.into_vec()
	}
}

/// See [`into_c_string`](TextBuf::into_c_string).
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<const N: usize> From<TextBuf<N>> for CString {
	#[inline(always)]
	fn from(value: TextBuf<N>) -> Self {
		value.into_c_string()
	}
}

/// Finds the length of `bytes` up to its first null octet.
#[inline]
#[must_use]
const fn nul_position(bytes: &[u8]) -> usize {
	let mut i = 0x0;

	while i < bytes.len() && bytes[i] != 0x00 {
		i += 0x1;
	}

	i
}

// NOTE: This function is used by the `text` macro
// to circumvent itself using code which may be
// forbidden by the macro user's lints. While this
// function is sound, please do not call it direct-
// ly. It is not a breaking change if it is re-
// moved.
#[doc(hidden)]
#[inline(always)]
#[must_use]
#[track_caller]
pub const fn __text<const N: usize>(s: &'static str) -> TextBuf<N> {
	match TextBuf::from_bytes(s.as_bytes()) {
		Ok(this) => this,
		Err(_)   => panic!("cannot construct text buffer from literal that is longer"),
	}
}
