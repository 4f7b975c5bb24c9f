use crate::error::{CuetagError, ErrorKind, Result};
use crate::macros::{err, id3v2_err, try_vec};

use std::io::Read;

use byteorder::ReadBytesExt;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// The width of a null terminator in this encoding
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::TextEncoding;
	///
	/// assert_eq!(TextEncoding::Latin1.terminator_len(), 1);
	/// assert_eq!(TextEncoding::UTF16BE.terminator_len(), 2);
	/// ```
	pub fn terminator_len(self) -> usize {
		match self {
			Self::Latin1 | Self::UTF8 => 1,
			Self::UTF16 | Self::UTF16BE => 2,
		}
	}

	/// Read an encoding byte, failing on any value outside of `0..=3`
	pub(crate) fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let byte = reader.read_u8()?;
		match Self::from_u8(byte) {
			Some(encoding) => Ok(encoding),
			None => id3v2_err!(UnsupportedEncoding(byte)),
		}
	}
}

#[derive(Eq, PartialEq, Debug, Default)]
pub(crate) struct DecodeTextResult {
	pub(crate) content: String,
	/// Number of bytes consumed, including the terminator
	pub(crate) bytes_read: usize,
	pub(crate) bom: [u8; 2],
}

/// Specify how to decode the provided text
///
/// By default, this will:
///
/// * Use [`TextEncoding::UTF8`] as the encoding
/// * Not expect the text to be null terminated
/// * Have no byte order mark
#[derive(Copy, Clone, Debug)]
pub(crate) struct TextDecodeOptions {
	pub encoding: TextEncoding,
	pub terminated: bool,
	pub bom: [u8; 2],
}

impl TextDecodeOptions {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn encoding(mut self, encoding: TextEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	pub(crate) fn terminated(mut self, terminated: bool) -> Self {
		self.terminated = terminated;
		self
	}

	/// The byte order mark to fall back on when a UTF-16 string doesn't carry one
	pub(crate) fn bom(mut self, bom: [u8; 2]) -> Self {
		self.bom = bom;
		self
	}
}

impl Default for TextDecodeOptions {
	fn default() -> Self {
		Self {
			encoding: TextEncoding::UTF8,
			terminated: false,
			bom: [0, 0],
		}
	}
}

/// Read a field of exactly `byte_length` bytes
///
/// If `options.terminated` is set, the terminator is optional, and the text is cut at the
/// first one found. The whole field is consumed either way.
pub(crate) fn read_field<R>(
	reader: &mut R,
	byte_length: usize,
	options: TextDecodeOptions,
) -> Result<DecodeTextResult>
where
	R: Read,
{
	let mut raw = try_vec![0; byte_length];
	reader.read_exact(&mut raw)?;

	if options.terminated {
		if let Some(pos) = find_terminator(&raw, options.encoding) {
			raw.truncate(pos);
		}
	}

	let (content, bom) = decode_bytes(&raw, options)?;
	Ok(DecodeTextResult {
		content,
		bytes_read: byte_length,
		bom,
	})
}

/// Read until a null terminator, consuming at most `max_bytes`
///
/// The stream is left directly after the terminator. Fails with
/// [`Id3v2ErrorKind::UnterminatedField`](crate::error::Id3v2ErrorKind::UnterminatedField)
/// if the budget runs out first.
pub(crate) fn read_until_terminator<R>(
	reader: &mut R,
	max_bytes: usize,
	options: TextDecodeOptions,
) -> Result<DecodeTextResult>
where
	R: Read,
{
	let (raw, terminator_len) = read_to_terminator(reader, max_bytes, options.encoding)?;
	if terminator_len == 0 {
		id3v2_err!(UnterminatedField);
	}

	let (content, bom) = decode_bytes(&raw, options)?;
	Ok(DecodeTextResult {
		content,
		bytes_read: raw.len() + terminator_len,
		bom,
	})
}

/// Same as [`read_until_terminator`], but the end of the budget is an acceptable terminator
pub(crate) fn read_until_terminator_or_end<R>(
	reader: &mut R,
	max_bytes: usize,
	options: TextDecodeOptions,
) -> Result<DecodeTextResult>
where
	R: Read,
{
	let (raw, terminator_len) = read_to_terminator(reader, max_bytes, options.encoding)?;

	let (content, bom) = decode_bytes(&raw, options)?;
	Ok(DecodeTextResult {
		content,
		bytes_read: raw.len() + terminator_len,
		bom,
	})
}

/// Read raw bytes up to a terminator, returning the bytes and the terminator length (0 if none was found)
fn read_to_terminator<R>(
	reader: &mut R,
	max_bytes: usize,
	encoding: TextEncoding,
) -> Result<(Vec<u8>, usize)>
where
	R: Read,
{
	let mut text_bytes = Vec::new();
	let mut remaining = max_bytes;

	match encoding {
		TextEncoding::Latin1 | TextEncoding::UTF8 => {
			while remaining > 0 {
				let byte = reader.read_u8()?;
				remaining -= 1;

				if byte == 0 {
					return Ok((text_bytes, 1));
				}

				text_bytes.push(byte);
			}
		},
		TextEncoding::UTF16 | TextEncoding::UTF16BE => {
			while remaining >= 2 {
				let b1 = reader.read_u8()?;
				let b2 = reader.read_u8()?;
				remaining -= 2;

				if b1 == 0 && b2 == 0 {
					return Ok((text_bytes, 2));
				}

				text_bytes.push(b1);
				text_bytes.push(b2);
			}

			// A dangling odd byte still belongs to the field
			if remaining == 1 {
				text_bytes.push(reader.read_u8()?);
			}
		},
	}

	Ok((text_bytes, 0))
}

/// Position of the first terminator in `bytes`, aligned to the encoding's code unit
fn find_terminator(bytes: &[u8], encoding: TextEncoding) -> Option<usize> {
	match encoding {
		TextEncoding::Latin1 | TextEncoding::UTF8 => bytes.iter().position(|b| *b == 0),
		TextEncoding::UTF16 | TextEncoding::UTF16BE => bytes
			.chunks_exact(2)
			.position(|c| c == [0, 0])
			.map(|pos| pos * 2),
	}
}

/// Decode raw bytes, returning the text and the byte order mark that was used
pub(crate) fn decode_bytes(raw: &[u8], options: TextDecodeOptions) -> Result<(String, [u8; 2])> {
	let mut bom = [0, 0];
	let text = match options.encoding {
		TextEncoding::Latin1 => latin1_decode(raw),
		TextEncoding::UTF8 => utf8_decode(raw)?,
		TextEncoding::UTF16BE => utf16_decode_bytes(raw, u16::from_be_bytes)?,
		TextEncoding::UTF16 => {
			if raw.is_empty() {
				return Ok((String::new(), options.bom));
			}

			match raw {
				[0xFE, 0xFF, rest @ ..] => {
					bom = [0xFE, 0xFF];
					utf16_decode_bytes(rest, u16::from_be_bytes)?
				},
				[0xFF, 0xFE, rest @ ..] => {
					bom = [0xFF, 0xFE];
					utf16_decode_bytes(rest, u16::from_le_bytes)?
				},
				// Some encoders only write a BOM for the first string in a frame
				_ => {
					bom = options.bom;
					match bom {
						[0xFE, 0xFF] => utf16_decode_bytes(raw, u16::from_be_bytes)?,
						[0xFF, 0xFE] => utf16_decode_bytes(raw, u16::from_le_bytes)?,
						_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
					}
				},
			}
		},
	};

	Ok((text, bom))
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| *c as char).collect::<String>();
	trim_end_nulls(&mut text);
	text
}

pub(crate) fn utf8_decode(bytes: &[u8]) -> Result<String> {
	std::str::from_utf8(bytes)
		.map(|text| trim_end_nulls_str(text).to_owned())
		.map_err(|_| CuetagError::new(ErrorKind::TextDecode("Expected a UTF-8 string")))
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		// In ID3v2.4, it is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible for us to encounter multiple BOMs in a single string.
		// We must filter them out.
		.filter_map(|c| match c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			[b1, b2] => Some(endianness([*b1, *b2])),
			_ => None,
		})
		.collect();

	String::from_utf16(&unverified)
		.map(|mut text| {
			trim_end_nulls(&mut text);
			text
		})
		.map_err(|_| CuetagError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}

pub(crate) fn trim_end_nulls_str(text: &str) -> &str {
	text.trim_end_matches('\0')
}
