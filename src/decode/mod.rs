// Copyright 2025 Gabriel Bjørnager Jensen.

//! Incremental UTF-8 decoding.
//!
//! The decoder consumes exactly one octet per call, so a stream may be fed in chunks of any size -- including one octet at a time as it arrives from a constrained source.
//! Malformed input is never reported through a panic or an error value: the decoder instead enters [`DecodeState::Invalid`] and resynchronises on the next octet.
//!
//! # Examples
//!
//! Decoding the Euro sign (U+20AC):
//!
//! ```rust
//! use stepstr::decode::{DecodeState, Decoder};
//!
//! let mut decoder = Decoder::new();
//!
//! assert_eq!(decoder.step(0xE2), DecodeState::Awaiting2);
//! assert_eq!(decoder.step(0x82), DecodeState::Awaiting1);
//! assert_eq!(decoder.step(0xAC), DecodeState::Ready);
//!
//! assert_eq!(decoder.code_point(), Some(0x20AC));
//! ```


mod code_points;
mod serde;

pub use code_points::{code_points, CodePoints};

use crate::error::StateError;
use crate::utf8::{Prefix, classify, is_continuation};

#[cfg(feature = "oct")]
use {
	oct::decode::{self, Decode},
	oct::encode::{self, Encode, SizedEncode},
};

/// The state of an in-progress decode.
///
/// The discriminant of each variant equals its raw integer form (see [`as_raw`](Self::as_raw)).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum DecodeState {
	/// Ready to start a new sequence.
	///
	/// Directly after a step, this also signals that a code point has been completed.
	#[default]
	Ready = 0x0,

	/// One continuation octet is still expected.
	Awaiting1 = 0x1,

	/// Two continuation octets are still expected.
	Awaiting2 = 0x2,

	/// Three continuation octets are still expected.
	Awaiting3 = 0x3,

	/// Four continuation octets are still expected.
	Awaiting4 = 0x4,

	/// Five continuation octets are still expected.
	Awaiting5 = 0x5,

	/// The stream is desynchronised.
	///
	/// Any partial code point has been discarded.
	/// The next octet is handled exactly as in [`Ready`](Self::Ready).
	Invalid = 0x6,
}

impl DecodeState {
	/// Converts a raw state integer.
	///
	/// # Errors
	///
	/// If `value` is not in the range `0..=6`, then an error is returned.
	#[inline]
	pub const fn from_raw(value: u16) -> Result<Self, StateError> {
		Self::from_u32(value as u32)
	}

	#[inline]
	const fn from_u32(value: u32) -> Result<Self, StateError> {
		let this = match value {
			0x0 => Self::Ready,
			0x1 => Self::Awaiting1,
			0x2 => Self::Awaiting2,
			0x3 => Self::Awaiting3,
			0x4 => Self::Awaiting4,
			0x5 => Self::Awaiting5,
			0x6 => Self::Invalid,

			_ => return Err(StateError { value }),
		};

		Ok(this)
	}

	/// Gets the raw integer form of the state.
	#[inline(always)]
	#[must_use]
	pub const fn as_raw(self) -> u16 {
		self as u16
	}

	/// Gets the state that awaits `remaining` continuation octets.
	#[inline]
	#[must_use]
	#[track_caller]
	const fn awaiting(remaining: u8) -> Self {
		match remaining {
			0x1 => Self::Awaiting1,
			0x2 => Self::Awaiting2,
			0x3 => Self::Awaiting3,
			0x4 => Self::Awaiting4,
			0x5 => Self::Awaiting5,

			_ => unreachable!(),
		}
	}

	/// Returns the amount of continuation octets still expected.
	///
	/// This is zero for both [`Ready`](Self::Ready) and [`Invalid`](Self::Invalid).
	#[inline]
	#[must_use]
	pub const fn remaining(self) -> u8 {
		match self {
			Self::Ready | Self::Invalid => 0x0,

			Self::Awaiting1 => 0x1,
			Self::Awaiting2 => 0x2,
			Self::Awaiting3 => 0x3,
			Self::Awaiting4 => 0x4,
			Self::Awaiting5 => 0x5,
		}
	}

	/// Checks if the state is [`Ready`](Self::Ready).
	#[inline(always)]
	#[must_use]
	pub const fn is_ready(self) -> bool {
		matches!(self, Self::Ready)
	}

	/// Checks if a sequence is in progress.
	#[inline(always)]
	#[must_use]
	pub const fn is_pending(self) -> bool {
		self.remaining() != 0x0
	}

	/// Checks if the state is [`Invalid`](Self::Invalid).
	#[inline(always)]
	#[must_use]
	pub const fn is_invalid(self) -> bool {
		matches!(self, Self::Invalid)
	}
}

impl From<DecodeState> for u16 {
	#[inline(always)]
	fn from(value: DecodeState) -> Self {
		value.as_raw()
	}
}

impl TryFrom<u16> for DecodeState {
	type Error = StateError;

	#[inline(always)]
	fn try_from(value: u16) -> Result<Self, Self::Error> {
		Self::from_raw(value)
	}
}

/// Feeds a single octet into a decode.
///
/// `state` and `code_point` are owned by the caller and must persist across calls for the duration of one stream.
/// Before the first octet of a stream, `state` must be [`Ready`](DecodeState::Ready).
///
/// The new state is both stored into `state` and returned:
///
/// * [`Ready`](DecodeState::Ready) -- `code_point` holds a complete code point;
/// * [`Awaiting1`](DecodeState::Awaiting1) through [`Awaiting5`](DecodeState::Awaiting5) -- more continuation octets are required;
/// * [`Invalid`](DecodeState::Invalid) -- the octet broke the stream and `code_point` has been zeroed.
///
/// Leading octets of up to six-octet sequences are accepted.
/// The octets `0xFE` and `0xFF` can never start a sequence and always yield [`Invalid`](DecodeState::Invalid).
///
/// # Examples
///
/// ```rust
/// use stepstr::decode::{DecodeState, decode_step};
///
/// let mut state = DecodeState::Ready;
/// let mut cp    = 0x0;
///
/// assert_eq!(decode_step(0xC3, &mut state, &mut cp), DecodeState::Awaiting1);
/// assert_eq!(decode_step(0xA9, &mut state, &mut cp), DecodeState::Ready);
///
/// assert_eq!(cp, 0xE9);
/// ```
#[inline]
pub const fn decode_step(octet: u8, state: &mut DecodeState, code_point: &mut u32) -> DecodeState {
	let next = match *state {
		DecodeState::Ready | DecodeState::Invalid => {
			match classify(octet) {
				Prefix::Single => {
					*code_point = octet as u32;
					DecodeState::Ready
				}

				Prefix::Lead { len, payload } => {
					*code_point = payload as u32;
					DecodeState::awaiting(len - 0x1)
				}

				Prefix::Continuation | Prefix::Invalid => {
					*code_point = 0x0;
					DecodeState::Invalid
				}
			}
		}

		pending => {
			if is_continuation(octet) {
				*code_point = (*code_point << 0x6) | (octet & 0b00111111) as u32;

				match pending.remaining() {
					0x1       => DecodeState::Ready,
					remaining => DecodeState::awaiting(remaining - 0x1),
				}
			} else {
				*code_point = 0x0;
				DecodeState::Invalid
			}
		}
	};

	*state = next;
	next
}

/// Owned decode state and code point accumulator.
///
/// This bundles the two values passed to [`decode_step`].
/// Each independent stream requires its own decoder.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Decoder {
	state:      DecodeState,
	code_point: u32,
}

impl Decoder {
	/// Constructs a new decoder in the [`Ready`](DecodeState::Ready) state.
	#[inline(always)]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			state:      DecodeState::Ready,
			code_point: 0x0,
		}
	}

	/// Feeds a single octet into the decoder.
	///
	/// See [`decode_step`] for the meaning of the returned state.
	#[inline(always)]
	pub const fn step(&mut self, octet: u8) -> DecodeState {
		decode_step(octet, &mut self.state, &mut self.code_point)
	}

	/// Gets the current state.
	#[inline(always)]
	#[must_use]
	pub const fn state(&self) -> DecodeState {
		self.state
	}

	/// Gets the completed code point.
	///
	/// This is only [`Some`] while the decoder is [`Ready`](DecodeState::Ready).
	/// A fresh decoder yields the null code point.
	#[inline]
	#[must_use]
	pub const fn code_point(&self) -> Option<u32> {
		if self.state.is_ready() {
			Some(self.code_point)
		} else {
			None
		}
	}

	/// Gets the code point accumulator regardless of the state.
	///
	/// While a sequence is pending, this holds the bits decoded so far.
	#[inline(always)]
	#[must_use]
	pub const fn raw_code_point(&self) -> u32 {
		self.code_point
	}

	/// Resets the decoder for use with a new stream.
	#[inline(always)]
	pub const fn reset(&mut self) {
		*self = Self::new();
	}

	/// Packs the decoder into a single integer.
	///
	/// The state is stored in bits 32 through 47 and the accumulator in bits 0 through 31.
	/// The result can be passed back to [`from_bits`](Self::from_bits).
	#[inline(always)]
	#[must_use]
	pub const fn to_bits(self) -> u64 {
		((self.state as u64) << 0x20) | self.code_point as u64
	}

	/// Unpacks a decoder from an integer.
	///
	/// # Errors
	///
	/// If the state bits do not denote a valid [`DecodeState`], then an error is returned.
	#[inline]
	pub const fn from_bits(bits: u64) -> Result<Self, StateError> {
		let state = match DecodeState::from_u32((bits >> 0x20) as u32) {
			Ok(state) => state,
			Err(e)    => return Err(e),
		};

		let code_point = bits as u32;

		Ok(Self { state, code_point })
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Decode for Decoder {
	type Error = StateError;

	/// Decodes from the format produced by [`to_bits`](Self::to_bits).
	#[inline]
	fn decode(input: &mut decode::Input) -> Result<Self, Self::Error> {
		let Ok(bits) = Decode::decode(input);

		Self::from_bits(bits)
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Encode for Decoder {
	type Error = <u64 as Encode>::Error;

	/// Encodes the output of [`to_bits`](Self::to_bits).
	#[inline]
	fn encode(&self, output: &mut encode::Output) -> Result<(), Self::Error> {
		self.to_bits().encode(output)
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl SizedEncode for Decoder {
	const MAX_ENCODED_SIZE: usize = u64::MAX_ENCODED_SIZE;
}
