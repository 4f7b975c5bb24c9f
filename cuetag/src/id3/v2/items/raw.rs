use crate::id3::v2::frame::header::FrameHeader;

/// A frame that was kept without decoding its body
///
/// The content has already had unsynchronisation and compression undone, but
/// encrypted frames are left exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawFrame {
	pub(crate) header: FrameHeader,
	/// The frame body
	pub data: Vec<u8>,
}

impl RawFrame {
	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
