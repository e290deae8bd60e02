//! Percent-encoded triplets.
//!
//! Encoding turns a character into one `%XX` triplet per UTF-8 byte, using
//! uppercase hexadecimal digits. Decoding reads a run of triplets back into a
//! single character.

use crate::error::{EncodingError, Result};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

#[inline(always)]
fn to_digit(b: u8) -> Option<u8> {
	match b {
		// ASCII 0..=9
		0x30..=0x39 => Some(b - 0x30),
		// ASCII A..=F
		0x41..=0x46 => Some(b - 0x37),
		// ASCII a..=f
		0x61..=0x66 => Some(b - 0x57),
		_ => None,
	}
}

/// Reads the triplet starting at `index`, if there is a well-formed one.
fn octet_at(bytes: &[u8], index: usize) -> Option<u8> {
	match bytes.get(index..index + 3)? {
		[b'%', a, b] => Some(to_digit(*a)? << 4 | to_digit(*b)?),
		_ => None,
	}
}

/// Octets iterator.
///
/// Iterates over the bytes encoded by consecutive triplets, stopping at the
/// first thing that is not a well-formed triplet.
struct Octets<'a> {
	bytes: &'a [u8],
	index: usize,
}

impl<'a> Iterator for Octets<'a> {
	type Item = u8;

	fn next(&mut self) -> Option<u8> {
		let octet = octet_at(self.bytes, self.index)?;
		self.index += 3;
		Some(octet)
	}
}

/// Percent-encodes a character.
///
/// ```
/// use pct_format::hex::encode_char;
///
/// assert_eq!(encode_char(' '), "%20");
/// assert_eq!(encode_char('é'), "%C3%A9");
/// ```
pub fn encode_char(c: char) -> String {
	let mut encoded = String::with_capacity(3 * c.len_utf8());
	encode_char_into(c, &mut encoded);
	encoded
}

/// Percent-encodes a character at the end of `buf`.
pub fn encode_char_into(c: char, buf: &mut String) {
	let mut utf8 = [0; 4];
	for byte in c.encode_utf8(&mut utf8).bytes() {
		buf.push('%');
		buf.push(HEX_UPPER[usize::from(byte >> 4)] as char);
		buf.push(HEX_UPPER[usize::from(byte & 0x0f)] as char);
	}
}

/// Character decoded by [`decode_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
	/// Decoded character.
	pub ch: char,

	/// Index of the first byte following the consumed input.
	pub end: usize,
}

impl Decoded {
	/// Whether the character lies outside the Basic Multilingual Plane.
	///
	/// Such a character would take a surrogate pair in UTF-16. It is still a
	/// single character here and is formatted as a whole.
	pub fn is_supplementary(&self) -> bool {
		u32::from(self.ch) > 0xFFFF
	}
}

/// Decodes the character percent-encoded at `index`.
///
/// `index` must point to a `%`. Consecutive triplets are consumed for as long
/// as they make up a single UTF-8 sequence.
///
/// A well-formed triplet that does not start a UTF-8 sequence decodes to the
/// character with the same code point as its octet, and only that triplet is
/// consumed. A `%` that is not followed by two hexadecimal digits is returned
/// as is and only it is consumed. Use [`validate`] to reject such input
/// beforehand.
///
/// ```
/// use pct_format::hex::decode_at;
///
/// let decoded = decode_at("a%E2%82%ACb", 1);
/// assert_eq!(decoded.ch, '€');
/// assert_eq!(decoded.end, 10);
///
/// let decoded = decode_at("caf%E9", 3);
/// assert_eq!(decoded.ch, '\u{E9}');
/// assert_eq!(decoded.end, 6);
/// ```
pub fn decode_at(input: &str, index: usize) -> Decoded {
	if let Some(decoded) = decode_utf8(input, index) {
		return decoded;
	}

	match octet_at(input.as_bytes(), index) {
		Some(octet) => Decoded {
			ch: char::from(octet),
			end: index + 3,
		},
		None => Decoded {
			ch: '%',
			end: index + 1,
		},
	}
}

/// Decodes the UTF-8 sequence percent-encoded at `index`, if there is one.
fn decode_utf8(input: &str, index: usize) -> Option<Decoded> {
	let mut octets = Octets {
		bytes: input.as_bytes(),
		index,
	};

	let ch = utf8_decode::Decoder::new(octets.by_ref()).next()?.ok()?;
	Some(Decoded {
		ch,
		end: octets.index,
	})
}

/// Checks that every `%` of `input` starts a triplet run encoding a UTF-8 character.
///
/// ```
/// use pct_format::hex::validate;
///
/// assert!(validate("Hello%20World%21").is_ok());
/// assert!(validate("100%").is_err());
/// ```
pub fn validate(input: &str) -> Result<()> {
	let bytes = input.as_bytes();
	let mut index = 0;
	while index < bytes.len() {
		if bytes[index] != b'%' {
			index += 1;
			continue;
		}

		if octet_at(bytes, index).is_none() {
			return Err(EncodingError::InvalidOctet { index });
		}

		match decode_utf8(input, index) {
			Some(decoded) => index = decoded.end,
			None => return Err(EncodingError::InvalidUtf8 { index }),
		}
	}

	Ok(())
}
