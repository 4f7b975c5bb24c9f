use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_field, read_until_terminator};

use std::io::Read;

/// An extended `ID3v2` URL frame
///
/// This is used in the `WXXX` frame, where the frames
/// are told apart by descriptions, rather than their [`FrameId`](crate::id3::v2::FrameId)s.
///
/// Unknown "W..." frames are also read as a `UserUrlFrame`, with their identifier as the description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserUrlFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The URL, always Latin-1
	pub url: String,
}

impl UserUrlFrame {
	/// Read a [`UserUrlFrame`] from a frame body of `body_len` bytes
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
		let url = read_field(
			reader,
			remaining,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		Ok(Self {
			header,
			encoding,
			description: description.content,
			url,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
