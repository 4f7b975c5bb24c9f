use crate::error::Result;
use crate::id3::v2::dictionary::CanonicalFrameType;
use crate::id3::v2::frame::FrameFlags;
use crate::id3::v2::header::FrameLayout;

use std::fmt::{Display, Formatter};
use std::io::Read;

/// An on-disk frame identifier
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub enum FrameId {
	/// A 3 character identifier, only used in ID3v2.2
	Short(String),
	/// A 4 character identifier, used in ID3v2.3 and ID3v2.4
	Long(String),
}

impl FrameId {
	/// Create a `FrameId` from its raw bytes
	///
	/// Returns `None` if `bytes` is not 3 or 4 characters within `'A'..='Z'` or `'0'..='9'`.
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::id3::v2::FrameId;
	///
	/// assert_eq!(FrameId::from_bytes(b"TT2"), Some(FrameId::Short(String::from("TT2"))));
	/// assert_eq!(FrameId::from_bytes(b"TIT2"), Some(FrameId::Long(String::from("TIT2"))));
	/// assert_eq!(FrameId::from_bytes(b"TI+2"), None);
	/// ```
	pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
		if !bytes
			.iter()
			.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
		{
			return None;
		}

		let id = bytes.iter().map(|b| char::from(*b)).collect::<String>();
		match bytes.len() {
			3 => Some(FrameId::Short(id)),
			4 => Some(FrameId::Long(id)),
			_ => None,
		}
	}

	/// Whether this is a 3 character ID3v2.2 identifier
	pub fn is_short(&self) -> bool {
		matches!(self, FrameId::Short(_))
	}

	/// Extracts a string slice containing the entire `FrameId`
	pub fn as_str(&self) -> &str {
		match self {
			FrameId::Short(id) | FrameId::Long(id) => id,
		}
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Information shared by every frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	pub(crate) frame_type: CanonicalFrameType,
	pub(crate) size: u32,
	pub(crate) flags: FrameFlags,
}

impl FrameHeader {
	/// The identifier as it appeared in the file
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// The version-independent frame type
	pub fn frame_type(&self) -> CanonicalFrameType {
		self.frame_type
	}

	/// The total size of the frame on disk, header included
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The frame's flags
	pub fn flags(&self) -> FrameFlags {
		self.flags
	}
}

/// A frame header exactly as stored
#[derive(Copy, Clone, Debug)]
pub(crate) struct RawFrameHeader {
	id: [u8; 4],
	id_len: usize,
	/// The declared body size, which includes any extra header data (group id, data length indicator, etc.)
	pub(crate) body_size: u32,
	pub(crate) flags: u16,
}

impl RawFrameHeader {
	/// Read a frame header laid out as `layout`
	///
	/// Returns `None` when the identifier is entirely null, meaning the padding has been reached.
	pub(crate) fn read<R>(reader: &mut R, layout: FrameLayout) -> Result<Option<Self>>
	where
		R: Read,
	{
		let mut header = [0; 10];
		let header = &mut header[..layout.header_len()];
		reader.read_exact(header)?;

		let (id_bytes, rest) = header.split_at(layout.id_len);
		if id_bytes.iter().all(|b| *b == 0) {
			return Ok(None);
		}

		let mut id = [0; 4];
		id[..layout.id_len].copy_from_slice(id_bytes);

		let body_size = layout
			.size_encoding
			.decode(&rest[..layout.size_len])?;

		let flags = if layout.has_flags {
			u16::from_be_bytes([rest[layout.size_len], rest[layout.size_len + 1]])
		} else {
			0
		};

		Ok(Some(Self {
			id,
			id_len: layout.id_len,
			body_size,
			flags,
		}))
	}

	pub(crate) fn id_bytes(&self) -> &[u8] {
		&self.id[..self.id_len]
	}
}
