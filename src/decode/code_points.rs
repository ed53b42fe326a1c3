// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::decode::{DecodeState, Decoder};
use crate::error::Utf8Error;

use core::iter::FusedIterator;

/// Iterator over the code points of an octet stream.
///
/// See [`code_points`] for details.
#[derive(Clone, Debug)]
#[must_use]
pub struct CodePoints<I> {
	iter:    I,
	decoder: Decoder,

	/// Offset of the next octet pulled from `iter`.
	index: usize,

	/// Leading octet and offset of the pending sequence.
	lead: (u8, usize),

	/// Octet that broke a sequence and has yet to be decoded on its own.
	retry: Option<(u8, usize)>,

	done: bool,
}

impl<I: Iterator<Item = u8>> CodePoints<I> {
	#[inline(always)]
	fn new(iter: I) -> Self {
		Self {
			iter,
			decoder: Decoder::new(),
			index:   0x0,
			lead:    (0x00, 0x0),
			retry:   None,
			done:    false,
		}
	}

	/// Pulls the next octet along with its offset.
	#[inline]
	fn next_octet(&mut self) -> Option<(u8, usize)> {
		if let Some(entry) = self.retry.take() {
			return Some(entry);
		}

		let octet = self.iter.next()?;
		let index = self.index;

		self.index += 0x1;

		Some((octet, index))
	}
}

impl<I: Iterator<Item = u8>> Iterator for CodePoints<I> {
	type Item = Result<u32, Utf8Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		loop {
			let was_pending = self.decoder.state().is_pending();

			let Some((octet, index)) = self.next_octet() else {
				self.done = true;

				if !was_pending {
					return None;
				}

				// The stream ended mid-sequence.

				self.decoder.reset();

				let (value, index) = self.lead;
				return Some(Err(Utf8Error { value, index }));
			};

			match self.decoder.step(octet) {
				DecodeState::Ready => {
					return Some(Ok(self.decoder.raw_code_point()));
				}

				DecodeState::Invalid => {
					if was_pending {
						// The breaking octet was swallowed by the
						// error. Decode it again on its own.
						self.retry = Some((octet, index));

						let (value, index) = self.lead;
						return Some(Err(Utf8Error { value, index }));
					}

					return Some(Err(Utf8Error { value: octet, index }));
				}

				_ => {
					if !was_pending {
						self.lead = (octet, index);
					}
				}
			}
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done {
			return (0x0, Some(0x0));
		}

		// At most one item per octet, plus one for a
		// dangling sequence.

		let (_, upper) = self.iter.size_hint();
		let extra = usize::from(self.retry.is_some()) + 0x1;

		(0x0, upper.and_then(|n| n.checked_add(extra)))
	}
}

impl<I: Iterator<Item = u8>> FusedIterator for CodePoints<I> { }

/// Decodes an octet stream into code points.
///
/// Every completed code point is yielded as [`Ok`].
/// Malformed input is yielded as [`Err`], after which decoding resumes:
///
/// * A continuation octet without a leading octet, or one of `0xFE` and `0xFF`, yields an error naming that octet.
/// * A sequence interrupted by a non-continuation octet yields an error naming the sequence's leading octet.
///   The interrupting octet is then decoded on its own.
/// * A stream ending mid-sequence yields a final error naming the dangling leading octet.
///
/// # Examples
///
/// ```rust
/// use stepstr::decode::code_points;
/// use stepstr::error::Utf8Error;
///
/// let mut iter = code_points(*b"\xC3\xA9\xF0A");
///
/// assert_eq!(iter.next(), Some(Ok(0xE9)));
/// assert_eq!(iter.next(), Some(Err(Utf8Error { value: 0xF0, index: 0x2 })));
/// assert_eq!(iter.next(), Some(Ok(0x41)));
/// assert_eq!(iter.next(), None);
/// ```
#[inline]
pub fn code_points<I: IntoIterator<Item = u8>>(octets: I) -> CodePoints<I::IntoIter> {
	CodePoints::new(octets.into_iter())
}
