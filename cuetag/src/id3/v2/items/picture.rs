use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::id3::v2::header::Id3v2Version;
use crate::macros::try_vec;
use crate::picture::{MimeType, PictureType};
use crate::util::text::{TextDecodeOptions, TextEncoding, read_until_terminator};

use std::io::Read;

use byteorder::ReadBytesExt;

/// An `ID3v2` attached picture frame
///
/// This is used for both the ID3v2.2 "PIC" and the ID3v2.3/4 "APIC" frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PictureFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The picture's mime type
	///
	/// This is `None` if the frame had an empty mime type.
	pub mime_type: Option<MimeType>,
	/// The picture type
	pub picture_type: PictureType,
	/// The picture description
	pub description: String,
	/// The raw image data
	pub data: Vec<u8>,
}

impl PictureFrame {
	/// Read a [`PictureFrame`] from a frame body of `body_len` bytes
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The encoding byte is invalid
	/// * The mime type or description isn't null terminated
	pub(crate) fn parse<R>(
		reader: &mut R,
		body_len: usize,
		header: FrameHeader,
		version: Id3v2Version,
	) -> Result<Self>
	where
		R: Read,
	{
		let mut remaining = super::shrink_budget(body_len, 1)?;
		let encoding = TextEncoding::read(reader)?;

		let mime_type;
		if version == Id3v2Version::V2 {
			remaining = super::shrink_budget(remaining, 3)?;
			let mut format = [0; 3];
			reader.read_exact(&mut format)?;

			mime_type = Some(MimeType::from_id3v22_format(format));
		} else {
			let mime = read_until_terminator(
				reader,
				remaining,
				TextDecodeOptions::new().encoding(TextEncoding::Latin1),
			)?;
			remaining = super::shrink_budget(remaining, mime.bytes_read)?;

			mime_type = (!mime.content.is_empty()).then(|| MimeType::from_str(&mime.content));
		}

		remaining = super::shrink_budget(remaining, 1)?;
		let picture_type = PictureType::from_u8(reader.read_u8()?);

		let description = read_until_terminator(
			reader,
			remaining,
			TextDecodeOptions::new().encoding(encoding),
		)?;
		remaining = super::shrink_budget(remaining, description.bytes_read)?;

		let mut data = try_vec![0; remaining];
		reader.read_exact(&mut data)?;

		Ok(Self {
			header,
			encoding,
			mime_type,
			picture_type,
			description: description.content,
			data,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
