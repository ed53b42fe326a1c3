// Copyright 2025 Gabriel Bjørnager Jensen.

//! `stepstr` is a Rust crate for streaming UTF-8 decoding and in-place case conversion over fixed buffers.
//!
//! The [`decode`] module decodes UTF-8 one octet at a time, so input may arrive in chunks of any size.
//! The [`case`] module converts null-terminated buffers between upper- and lowercase without ever changing their length.
//! Neither allocates.
//!
//! # Examples
//!
//! ```rust
//! use stepstr::{TextBuf, text};
//! use stepstr::decode::{DecodeState, Decoder};
//!
//! let mut decoder = Decoder::new();
//! let mut s: TextBuf<0x10> = text!("");
//!
//! for &octet in b"na\xC3\xAFve" {
//! 	s.push(octet).unwrap();
//!
//! 	if decoder.step(octet) == DecodeState::Invalid {
//! 		panic!("malformed input");
//! 	}
//! }
//!
//! s.make_uppercase();
//! assert_eq!(s, "NA\u{00CF}VE");
//! ```

#![no_std]

#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate self as stepstr;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod case;
pub mod decode;
pub mod error;

mod text;
mod utf8;

pub use text::{__text, TextBuf};

/// Directly constructs a [`TextBuf`](crate::TextBuf) object.
///
/// This macro tests at compile-time whether the string literal can fit into the inferred capacity.
/// Compilation will fail if this is not the case.
#[macro_export]
macro_rules! text {
	($s:expr) => {
		const { stepstr::__text($s) }
	};

	() => {
		const { stepstr::__text("") }
	};
}
