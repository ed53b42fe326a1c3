// Copyright 2025 Gabriel Bjørnager Jensen.

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A raw decode state was out of range.
///
/// Valid states are in the range `0..=6`.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub struct StateError {
	/// The rejected state value.
	pub value: u32,
}

impl Display for StateError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "decode state ({}) is not in the range `0..=6`", self.value)
	}
}

impl Error for StateError { }

impl From<Infallible> for StateError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}
