// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use core::cmp::Ordering;
use stepstr::{TextBuf, text};
use stepstr::error::{LengthError, Utf8Error};

#[test]
fn test_text_buf() {
	let s: TextBuf::<0x5> = b"hello world".iter().copied().collect();

	assert_eq!(s, "hell");
	assert_eq!(s.len(), 0x4);
	assert_eq!(s.remaining(), 0x0);
	assert_eq!(s.as_bytes_with_nul(), b"hell\0");
}

#[test]
fn test_text_buf_from_bytes() {
	assert_eq!(
		TextBuf::<0x4>::from_bytes(b"abcd"),
		Err(LengthError { remaining: 0x3, count: 0x4 }),
	);

	let s = TextBuf::<0x4>::from_bytes(b"abc").unwrap();
	assert_eq!(s, "abc");

	// Input ends at the first null octet.
	let s = TextBuf::<0x4>::from_bytes(b"ab\0cdefgh").unwrap();
	assert_eq!(s, "ab");
	assert_eq!(s.as_bytes_with_nul(), b"ab\0");

	let s = TextBuf::<0x1>::from_bytes(b"").unwrap();
	assert!(s.is_empty());
	assert_eq!(s.capacity(), 0x0);
}

#[test]
fn test_text_buf_push() {
	let mut s = TextBuf::<0x8>::new();

	s.push(b'a').unwrap();
	s.push(0x00).unwrap();
	s.push_str("b\u{00E9}").unwrap();

	assert_eq!(s, b"ab\xC3\xA9".as_slice());
	assert_eq!(s.remaining(), 0x3);

	assert_eq!(
		s.push_str("wxyz"),
		Err(LengthError { remaining: 0x3, count: 0x4 }),
	);

	// Failed pushes leave the buffer alone.
	assert_eq!(s.as_bytes(), b"ab\xC3\xA9");

	s.push_bytes(b"xy\0z").unwrap();
	s.push(b'!').unwrap();

	assert_eq!(s.push(b'?'), Err(LengthError { remaining: 0x0, count: 0x1 }));
	assert_eq!(s.as_bytes_with_nul(), b"ab\xC3\xA9xy!\0");
}

#[test]
fn test_text_buf_truncate() {
	let mut s: TextBuf<0x10> = text!("COGITO ERGO SUM");

	s.truncate(0x20);
	assert_eq!(s, "COGITO ERGO SUM");

	s.truncate(0x6);
	assert_eq!(s.as_bytes_with_nul(), b"COGITO\0");

	s.clear();
	assert!(s.is_empty());
	assert_eq!(s.as_bytes_with_nul(), b"\0");
}

#[test]
fn test_text_buf_case() {
	let mut s: TextBuf<0x20> = text!("Na\u{00EF}ve caf\u{00E9} \u{00D7}\u{20AC}");

	s.make_uppercase();
	assert_eq!(s, "NA\u{00CF}VE CAF\u{00C9} \u{00D7}\u{20AC}");

	s.make_lowercase();
	assert_eq!(s, "na\u{00EF}ve caf\u{00E9} \u{00D7}\u{20AC}");

	// Stale octets past the terminator are never touched.

	let mut s = TextBuf::<0x8>::from_bytes(b"abcdef").unwrap();
	s.truncate(0x2);
	s.make_uppercase();

	let (buf, len) = s.into_raw_parts();

	assert_eq!(len, 0x2);
	assert_eq!(&buf, b"AB\0def\0\0");
}

#[test]
fn test_text_buf_to_str() {
	let s = TextBuf::<0x8>::from_bytes(b"20\xE2\x82\xAC").unwrap();
	assert_eq!(s.to_str(), Ok("20\u{20AC}"));

	let s = TextBuf::<0x8>::from_bytes(b"20\x20\xAC").unwrap();
	assert_eq!(s.to_str(), Err(Utf8Error { value: 0xAC, index: 0x3 }));
}

#[test]
fn test_text_buf_code_points() {
	let s = TextBuf::<0x10>::from_bytes(b"a\xC3\xA9\x80\xE2\x82\xAC").unwrap();

	let mut iter = s.code_points();

	assert_eq!(iter.next(), Some(Ok(0x61)));
	assert_eq!(iter.next(), Some(Ok(0xE9)));
	assert_eq!(iter.next(), Some(Err(Utf8Error { value: 0x80, index: 0x3 })));
	assert_eq!(iter.next(), Some(Ok(0x20AC)));
	assert_eq!(iter.next(), None);
}

#[test]
fn test_text_buf_cmp() {
	let s0: TextBuf<0x0D> = text!("Hello there!");
	let s1: TextBuf<0x13> = text!("MEIN_GRO\u{1E9E}_GOTT");
	let s2: TextBuf<0x06> = text!("Hello");

	assert_eq!(s0.partial_cmp(&s0), Some(Ordering::Equal));
	assert_eq!(s0.partial_cmp(&s1), Some(Ordering::Less));
	assert_eq!(s0.partial_cmp(&s2), Some(Ordering::Greater));

	assert_eq!(s1.partial_cmp(&s0), Some(Ordering::Greater));
	assert_eq!(s2.partial_cmp(&s1), Some(Ordering::Less));

	assert_eq!(s0, "Hello there!");
	assert_eq!(s1, "MEIN_GRO\u{1E9E}_GOTT");
	assert_eq!(s2, "Hello");

	let s3: TextBuf<0x40> = text!("Hello");
	assert_eq!(s2, s3);
}

#[cfg(feature = "alloc")]
#[test]
fn test_text_buf_fmt() {
	use alloc::format;

	let s = TextBuf::<0x10>::from_bytes(b"caf\xC3\xA9 \xFF!").unwrap();

	assert_eq!(format!("{s}"), "caf\u{00E9} \u{FFFD}!");
	assert_eq!(format!("{s:?}"), "\"caf\\xc3\\xa9 \\xff!\"");
}

#[cfg(feature = "std")]
#[test]
fn test_text_buf_write() {
	use std::io::{ErrorKind, Write};

	let mut s = TextBuf::<0x6>::new();

	assert_eq!(s.write(b"ab\0c").unwrap(), 0x4);
	assert_eq!(s.write(b"defg").unwrap(), 0x2);
	assert_eq!(s, "abcde");

	assert_eq!(s.write_all(b"h").unwrap_err().kind(), ErrorKind::WriteZero);
}

#[cfg(feature = "alloc")]
#[test]
fn test_text_buf_into_alloc() {
	use alloc::ffi::CString;
	use alloc::vec::Vec;

	let s: TextBuf<0x8> = text!("na\u{00EF}f");

	assert_eq!(Vec::from(s), b"na\xC3\xAFf");
	assert_eq!(CString::from(s).as_bytes_with_nul(), b"na\xC3\xAFf\0");
}

#[cfg(feature = "serde")]
#[test]
fn test_text_buf_serde() {
	use serde_test::{assert_de_tokens, assert_tokens, Token};

	let s = TextBuf::<0x10>::from_bytes(b"I\xE2\x9D\xA4serde").unwrap();

	assert_tokens(
		&s,
		&[
			Token::Bytes(b"I\xE2\x9D\xA4serde"),
		],
	);

	assert_de_tokens(
		&s,
		&[
			Token::Str("I\u{2764}serde"),
		],
	);
}

#[cfg(feature = "serde")]
#[test]
fn test_text_buf_serde_seq() {
	use serde_test::{assert_de_tokens, assert_de_tokens_error, Token};

	let s = TextBuf::<0x10>::from_bytes(b"caf\xC3\xA9").unwrap();

	assert_de_tokens(
		&s,
		&[
			Token::Seq { len: Some(0x5) },
			Token::U8(b'c'),
			Token::U8(b'a'),
			Token::U8(b'f'),
			Token::U8(0xC3),
			Token::U8(0xA9),
			Token::SeqEnd,
		],
	);

	assert_de_tokens_error::<TextBuf<0x4>>(
		&[
			Token::Seq { len: Some(0x4) },
			Token::U8(b'a'),
			Token::U8(b'b'),
			Token::U8(b'c'),
			Token::U8(b'd'),
			Token::SeqEnd,
		],
		"text buffer with (0) remaining octets cannot hold (1) more octets",
	);
}
