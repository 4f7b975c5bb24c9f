use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_field};

use std::io::Read;

/// An `ID3v2` text frame
///
/// This is used in the "T..." frames, besides "TXXX".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	///
	/// In ID3v2.4, multiple values are separated by null. See [`TextFrame::values`]
	pub value: String,
}

impl TextFrame {
	/// Read a [`TextFrame`] from a frame body of `body_len` bytes
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The encoding byte is invalid
	/// * Unable to decode the text
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let encoding = TextEncoding::read(reader)?;
		let value = read_field(
			reader,
			super::shrink_budget(body_len, 1)?,
			TextDecodeOptions::new().encoding(encoding),
		)?
		.content;

		Ok(Self {
			header,
			encoding,
			value,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Iterate over every null separated value
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::id3::v2::{CanonicalFrameType, Frame};
	/// # use cuetag::id3::v2::Id3v2Tag;
	///
	/// # fn main() -> cuetag::error::Result<()> {
	/// # let tag = Id3v2Tag::default();
	/// if let Some(Frame::Text(artists)) = tag.get(CanonicalFrameType::Performer) {
	/// 	for artist in artists.values() {
	/// 		println!("Artist: {artist}");
	/// 	}
	/// }
	/// # Ok(()) }
	/// ```
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.value.split('\0')
	}
}
