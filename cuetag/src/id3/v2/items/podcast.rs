use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::macros::try_vec;

use std::io::Read;

/// The iTunes podcast marker frame (PCST)
///
/// Its presence marks the file as a podcast. The content is normally 4 null bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PodcastMarkerFrame {
	pub(crate) header: FrameHeader,
	/// The frame content
	pub data: Vec<u8>,
}

impl PodcastMarkerFrame {
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let mut data = try_vec![0; body_len];
		reader.read_exact(&mut data)?;

		Ok(Self { header, data })
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
