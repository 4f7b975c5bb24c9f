use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_field, read_until_terminator};

use std::io::Read;

/// An `ID3v2` comment frame
///
/// This grammar is shared by "COMM" and "USLT" frames. Check [`FrameHeader::frame_type`] to tell them apart.
///
/// Similar to `TXXX` and `WXXX` frames, comments are told apart by their descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommentFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and comment text
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl CommentFrame {
	/// Read a [`CommentFrame`] from a frame body of `body_len` bytes
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The encoding byte is invalid
	/// * The description isn't null terminated
	/// * Unable to decode the text
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let remaining = super::shrink_budget(body_len, 4)?;
		let encoding = TextEncoding::read(reader)?;

		let mut language = [0; 3];
		reader.read_exact(&mut language)?;

		let description = read_until_terminator(
			reader,
			remaining,
			TextDecodeOptions::new().encoding(encoding),
		)?;

		let remaining = super::shrink_budget(remaining, description.bytes_read)?;

		// The terminator is optional on the content
		let content = read_field(
			reader,
			remaining,
			TextDecodeOptions::new()
				.encoding(encoding)
				.terminated(true)
				.bom(description.bom),
		)?
		.content;

		Ok(Self {
			header,
			encoding,
			language,
			description: description.content,
			content,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// The language code as a string
	///
	/// Returns `None` if the language isn't valid ASCII.
	pub fn language_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.language)
			.ok()
			.filter(|lang| lang.is_ascii())
	}
}
