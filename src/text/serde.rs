// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "serde")]

use crate::TextBuf;

use core::fmt::{self, Formatter};
use core::marker::PhantomData;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

#[derive(Debug, Default)]
struct TextBufVisitor<const N: usize> {
	_s: PhantomData<fn() -> TextBuf<N>>,
}

impl<const N: usize> TextBufVisitor<N> {
	#[inline(always)]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			_s: PhantomData,
		}
	}
}

impl<'de, const N: usize> Visitor<'de> for TextBufVisitor<N> {
	type Value = TextBuf<N>;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "at most `{}` octets", N - 0x1)
	}

	#[inline]
	fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
		TextBuf::from_bytes(v).map_err(E::custom)
	}

	#[inline]
	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		self.visit_bytes(v.as_bytes())
	}

	/// Accepts the octet sequences written by formats without a native byte array type.
	#[inline]
	fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		let mut this = TextBuf::new();

		while let Some(octet) = seq.next_element::<u8>()? {
			this.push(octet).map_err(<A::Error as de::Error>::custom)?;
		}

		Ok(this)
	}
}

/// Accepts both byte arrays and strings.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, const N: usize> Deserialize<'de> for TextBuf<N> {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_bytes(TextBufVisitor::new())
	}
}

/// Serialises the contents as a byte array, without the null terminator.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<const N: usize> Serialize for TextBuf<N> {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_bytes(self.as_bytes())
	}
}
