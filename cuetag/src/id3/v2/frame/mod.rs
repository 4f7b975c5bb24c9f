pub(super) mod content;
pub(super) mod header;
pub(super) mod read;

use super::items::{
	CommentFrame, InvolvedPeopleListFrame, MusicCdIdentifierFrame, PictureFrame,
	PodcastMarkerFrame, RawFrame, TextFrame, UniqueFileIdentifierFrame, UrlFrame, UserTextFrame,
	UserUrlFrame,
};
use crate::id3::v2::dictionary::CanonicalFrameType;
use crate::id3::v2::header::Id3v2Version;
use header::{FrameHeader, FrameId};

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum Frame {
			$(
				$(#[$field_meta:meta])+
				$variant:ident($type:ty),
			)*
		}
	) => {
		$(#[$meta])*
		pub enum Frame {
			$(
				$(#[$field_meta])+
				$variant($type),
			)*
		}

		impl Frame {
			/// The frame header, shared by every variant
			pub fn header(&self) -> &FrameHeader {
				match self {
					$(
						Frame::$variant(frame) => &frame.header,
					)*
				}
			}

			/// A short name for the variant, used in logging
			pub(crate) fn name(&self) -> &'static str {
				match self {
					$(
						Frame::$variant(_) => stringify!($variant),
					)*
				}
			}
		}

		$(
			impl From<$type> for Frame {
				fn from(value: $type) -> Self {
					Frame::$variant(value)
				}
			}
		)*
	}
}

define_frames! {
	/// Represents an ID3v2 frame
	///
	/// Every variant carries a [`FrameHeader`] holding its canonical type, on-disk size, and flags.
	#[non_exhaustive]
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum Frame {
		/// Represents a "T..." (excluding TXXX) frame
		Text(TextFrame),
		/// Represents a "W..." (excluding WXXX) frame
		Url(UrlFrame),
		/// Represents a "COMM" or "USLT" frame
		Comment(CommentFrame),
		/// Represents an "APIC" or "PIC" frame
		Picture(PictureFrame),
		/// Represents a "UFID" frame
		UniqueFileIdentifier(UniqueFileIdentifierFrame),
		/// Represents an "MCDI" frame
		MusicCdIdentifier(MusicCdIdentifierFrame),
		/// Represents an "IPLS", "TIPL", or "TMCL" frame
		InvolvedPeopleList(InvolvedPeopleListFrame),
		/// Represents a "TXXX" frame, or an unknown "T..." frame
		UserText(UserTextFrame),
		/// Represents a "WXXX" frame, or an unknown "W..." frame
		UserUrl(UserUrlFrame),
		/// Represents a "PCST" frame
		PodcastMarker(PodcastMarkerFrame),
		/// A frame that is kept undecoded
		///
		/// This is used for known frames without a dedicated decoder, encrypted frames,
		/// and (with [`ParseOptions::keep_unknown_frames`](crate::config::ParseOptions::keep_unknown_frames))
		/// unknown frames.
		Raw(RawFrame),
	}
}

impl Frame {
	/// The identifier as it appeared in the file
	pub fn id(&self) -> &FrameId {
		&self.header().id
	}

	/// The version-independent frame type
	pub fn frame_type(&self) -> CanonicalFrameType {
		self.header().frame_type
	}

	/// The total size of the frame on disk, header included
	pub fn size(&self) -> u32 {
		self.header().size
	}

	/// The frame's flags
	pub fn flags(&self) -> FrameFlags {
		self.header().flags
	}
}

/// Various flags to describe the content of an item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Whether the frame should be kept when the tag is altered
	pub preserve_on_tag_alter: bool,
	/// Whether the frame should be kept when the audio is altered
	///
	/// Some frames (ex. `TLEN`) are never kept, no matter what the file declares.
	/// See [`CanonicalFrameType::discard_on_file_alter`]
	pub preserve_on_file_alter: bool,
	/// Whether the frame is meant to be read only
	pub read_only: bool,
	/// Whether the frame content was zlib compressed
	pub compression: bool,
	/// The encryption method symbol, if the frame is encrypted
	pub encryption: Option<u8>,
	/// The group identifier, if the frame belongs to a group
	pub group_id: Option<u8>,
	/// The data length indicator
	///
	/// This is the size of the frame body once unsynchronisation and compression are undone.
	/// In ID3v2.3, this is only present on compressed frames.
	pub data_length_indicator: Option<u32>,
	/// Whether the frame body was unsynchronised
	///
	/// Unsynchronisation replaces every `0xFF` followed by a byte with its top three bits set
	/// (or by `0x00`) with `0xFF 0x00`, so that no false MPEG sync is found in the tag. Reading
	/// removes every `0x00` that directly follows an `0xFF`.
	///
	/// NOTE: In ID3v2.4, this is also set for every frame when the tag itself is unsynchronised.
	pub unsynchronisation: bool,
}

impl FrameFlags {
	/// Decode the flag field of a frame
	///
	/// The extra header data (group id, encryption method, data length indicator) is
	/// filled in while reading the frame. Flags that have extra data are set to `Some(0)` here.
	pub(crate) fn parse(version: Id3v2Version, flags: u16, frame_type: CanonicalFrameType) -> Self {
		let mut parsed = match version {
			// ID3v2.2 has no frame flags
			Id3v2Version::V2 => FrameFlags {
				preserve_on_tag_alter: true,
				preserve_on_file_alter: true,
				..FrameFlags::default()
			},
			Id3v2Version::V3 => FrameFlags {
				preserve_on_tag_alter: flags & 0x8000 == 0,
				preserve_on_file_alter: flags & 0x4000 == 0,
				read_only: flags & 0x2000 == 0x2000,
				compression: flags & 0x0080 == 0x0080,
				encryption: (flags & 0x0040 == 0x0040).then_some(0),
				group_id: (flags & 0x0020 == 0x0020).then_some(0),
				data_length_indicator: None,
				unsynchronisation: false,
			},
			Id3v2Version::V4 => FrameFlags {
				preserve_on_tag_alter: flags & 0x4000 == 0,
				preserve_on_file_alter: flags & 0x2000 == 0,
				read_only: flags & 0x1000 == 0x1000,
				group_id: (flags & 0x0040 == 0x0040).then_some(0),
				compression: flags & 0x0008 == 0x0008,
				encryption: (flags & 0x0004 == 0x0004).then_some(0),
				unsynchronisation: flags & 0x0002 == 0x0002,
				data_length_indicator: (flags & 0x0001 == 0x0001).then_some(0),
			},
		};

		if frame_type.discard_on_file_alter() {
			parsed.preserve_on_file_alter = false;
		}

		parsed
	}
}
