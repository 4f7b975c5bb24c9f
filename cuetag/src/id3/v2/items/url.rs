use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_field};

use std::io::Read;

/// An `ID3v2` URL frame
///
/// This is used in the "W..." frames, besides "WXXX". The URL is always Latin-1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrlFrame {
	pub(crate) header: FrameHeader,
	/// The URL
	pub url: String,
}

impl UrlFrame {
	/// Read a [`UrlFrame`] from a frame body of `body_len` bytes
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let url = read_field(
			reader,
			body_len,
			TextDecodeOptions::new().encoding(TextEncoding::Latin1),
		)?
		.content;

		Ok(Self { header, url })
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
