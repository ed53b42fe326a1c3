// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "serde")]

use crate::decode::Decoder;

use core::fmt::{self, Formatter};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

#[derive(Debug)]
struct DecoderVisitor;

impl Visitor<'_> for DecoderVisitor {
	type Value = Decoder;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "a packed decoder state")
	}

	#[inline]
	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
		Decoder::from_bits(v).map_err(E::custom)
	}
}

/// Deserialises from the output of [`to_bits`](Decoder::to_bits).
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Decoder {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_u64(DecoderVisitor)
	}
}

/// Serialises the output of [`to_bits`](Decoder::to_bits).
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Decoder {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(self.to_bits())
	}
}
