use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_field, read_until_terminator};

use std::io::Read;

/// An extended `ID3v2` text frame
///
/// This is used in the `TXXX` frame, where the frames
/// are told apart by descriptions, rather than their [`FrameId`](crate::id3::v2::FrameId)s.
/// This means for each `UserTextFrame` in the tag, the description
/// must be unique.
///
/// Unknown "T..." frames are also read as a `UserTextFrame`, with their identifier as the description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserTextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and its content
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl UserTextFrame {
	/// Read a [`UserTextFrame`] from a frame body of `body_len` bytes
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
		let encoding = TextEncoding::read(reader)?;
		let remaining = super::shrink_budget(body_len, 1)?;

		let description = read_until_terminator(
			reader,
			remaining,
			TextDecodeOptions::new().encoding(encoding),
		)?;

		let remaining = super::shrink_budget(remaining, description.bytes_read)?;
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
			description: description.content,
			content,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
