// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

/// The role of an octet at a sequence start.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Prefix {
	/// A complete, single-octet (ASCII) sequence.
	Single,

	/// A continuation octet, i.e. `0b10xxxxxx`.
	Continuation,

	/// The leading octet of a multi-octet sequence.
	///
	/// `len` is the total sequence length (two to six) and `payload` holds the bits of the leading octet that belong to the code point.
	Lead { len: u8, payload: u8 },

	/// Either `0xFE` or `0xFF`, neither of which may start a sequence.
	Invalid,
}

/// Classifies an octet by its leading bits.
#[inline]
#[must_use]
pub(crate) const fn classify(octet: u8) -> Prefix {
	match octet {
		0b00000000..=0b01111111 => Prefix::Single,
		0b10000000..=0b10111111 => Prefix::Continuation,

		0b11000000..=0b11011111 => Prefix::Lead { len: 0x2, payload: octet & 0b00011111 },
		0b11100000..=0b11101111 => Prefix::Lead { len: 0x3, payload: octet & 0b00001111 },
		0b11110000..=0b11110111 => Prefix::Lead { len: 0x4, payload: octet & 0b00000111 },
		0b11111000..=0b11111011 => Prefix::Lead { len: 0x5, payload: octet & 0b00000011 },
		0b11111100..=0b11111101 => Prefix::Lead { len: 0x6, payload: octet & 0b00000001 },

		0b11111110..=0b11111111 => Prefix::Invalid,
	}
}

/// Tests if `octet` is a continuation octet.
#[inline(always)]
#[must_use]
pub(crate) const fn is_continuation(octet: u8) -> bool {
	octet & 0b11000000 == 0b10000000
}
