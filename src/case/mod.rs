// Copyright 2025 Gabriel Bjørnager Jensen.

//! In-place case conversion.
//!
//! Only ASCII letters and the case-paired letters of the Latin-1 Supplement block (U+00C0 through U+00FE, except U+00D7 and U+00F7) are converted.
//! Every mapping preserves the encoded length of its character, so buffers are never resized.
//!
//! # Examples
//!
//! ```rust
//! use stepstr::case::{to_lower, to_upper};
//!
//! let mut buf = *b"caf\xC3\xA9\0";
//!
//! to_upper(&mut buf);
//! assert_eq!(&buf, b"CAF\xC3\x89\0");
//!
//! to_lower(&mut buf);
//! assert_eq!(&buf, b"caf\xC3\xA9\0");
//! ```


use crate::utf8::{Prefix, classify, is_continuation};

#[derive(Clone, Copy)]
enum Case {
	Upper,
	Lower,
}

impl Case {
	#[inline(always)]
	#[must_use]
	const fn map(self, code_point: u32) -> u32 {
		match self {
			Self::Upper => to_upper_code_point(code_point),
			Self::Lower => to_lower_code_point(code_point),
		}
	}
}

/// Maps a code point to its uppercase counterpart.
///
/// Lowercase ASCII letters are mapped, as are U+00E0 through U+00F6 and U+00F8 through U+00FE.
/// All other code points -- including those with case pairs outside of these ranges -- are returned as-is.
#[inline]
#[must_use]
pub const fn to_upper_code_point(code_point: u32) -> u32 {
	match code_point {
		0x0061..=0x007A
		| 0x00E0..=0x00F6
		| 0x00F8..=0x00FE => code_point - 0x20,

		_ => code_point,
	}
}

/// Maps a code point to its lowercase counterpart.
///
/// Uppercase ASCII letters are mapped, as are U+00C0 through U+00D6 and U+00D8 through U+00DE.
/// All other code points are returned as-is.
#[inline]
#[must_use]
pub const fn to_lower_code_point(code_point: u32) -> u32 {
	match code_point {
		0x0041..=0x005A
		| 0x00C0..=0x00D6
		| 0x00D8..=0x00DE => code_point + 0x20,

		_ => code_point,
	}
}

/// Converts a null-terminated buffer to uppercase.
///
/// The buffer is walked one sequence at a time up to the first null octet, or up to the end of the slice if it has none:
///
/// * ASCII letters and two-octet Latin-1 letters are rewritten in place;
/// * longer sequences are passed over as a whole;
/// * lone continuation octets, `0xFE`, and `0xFF` are passed over one at a time.
///
/// Malformed input is left as-is and is never reported.
/// Sequences cut short by the terminator are never rewritten, and the terminator itself is never passed.
#[inline(always)]
pub const fn to_upper(buf: &mut [u8]) {
	convert(buf, Case::Upper);
}

/// Converts a null-terminated buffer to lowercase.
///
/// See [`to_upper`] for how the buffer is walked.
#[inline(always)]
pub const fn to_lower(buf: &mut [u8]) {
	convert(buf, Case::Lower);
}

const fn convert(buf: &mut [u8], case: Case) {
	let mut i = 0x0;

	while i < buf.len() && buf[i] != 0x00 {
		let octet = buf[i];

		let len = match classify(octet) {
			Prefix::Single => {
				buf[i] = case.map(octet as u32) as u8;
				0x1
			}

			Prefix::Lead { len: 0x2, payload } => {
				if i + 0x1 < buf.len() && is_continuation(buf[i + 0x1]) {
					let code_point = ((payload as u32) << 0x6) | (buf[i + 0x1] & 0b00111111) as u32;
					let mapped     = case.map(code_point);

					// Overlong encodings of ASCII are left alone.
					if code_point >= 0x80 && mapped != code_point {
						buf[i]       = 0b11000000 | ((mapped >> 0x6) & 0b00011111) as u8;
						buf[i + 0x1] = 0b10000000 | ( mapped         & 0b00111111) as u8;
					}
				}

				0x2
			}

			Prefix::Lead { len, .. } => len as usize,

			Prefix::Continuation | Prefix::Invalid => 0x1,
		};

		// Skip the rest of the sequence without passing
		// the terminator.

		i += 0x1;

		let mut skipped = 0x1;
		while skipped < len && i < buf.len() && buf[i] != 0x00 {
			i       += 0x1;
			skipped += 0x1;
		}
	}
}
