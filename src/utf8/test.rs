// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::utf8::{Prefix, classify, is_continuation};

#[test]
fn test_classify() {
	assert_eq!(classify(0x00), Prefix::Single);
	assert_eq!(classify(0x7F), Prefix::Single);

	assert_eq!(classify(0x80), Prefix::Continuation);
	assert_eq!(classify(0xBF), Prefix::Continuation);

	assert_eq!(classify(0b11011111), Prefix::Lead { len: 0x2, payload: 0b11111 });
	assert_eq!(classify(0b11101111), Prefix::Lead { len: 0x3, payload: 0b1111 });
	assert_eq!(classify(0b11110111), Prefix::Lead { len: 0x4, payload: 0b111 });
	assert_eq!(classify(0b11111011), Prefix::Lead { len: 0x5, payload: 0b11 });
	assert_eq!(classify(0b11111101), Prefix::Lead { len: 0x6, payload: 0b1 });

	assert_eq!(classify(0xFE), Prefix::Invalid);
	assert_eq!(classify(0xFF), Prefix::Invalid);
}

#[test]
fn test_classify_agrees_with_core() {
	let mut buf = [0x00; 0x4];

	for c in ['\0', 'A', '\u{00E9}', '\u{07FF}', '\u{0800}', '\u{20AC}', '\u{FFFD}', '\u{10000}', '\u{1F54B}'] {
		let s = c.encode_utf8(&mut buf);

		let expected = s.len();

		match classify(s.as_bytes()[0x0]) {
			Prefix::Single           => assert_eq!(expected, 0x1),
			Prefix::Lead { len, .. } => assert_eq!(usize::from(len), expected),

			prefix => panic!("{c:?} classified as {prefix:?}"),
		}
	}
}

#[test]
fn test_is_continuation() {
	for octet in 0x00..=0xFFu8 {
		assert_eq!(
			is_continuation(octet),
			classify(octet) == Prefix::Continuation,
			"{octet:#04X}",
		);
	}
}
