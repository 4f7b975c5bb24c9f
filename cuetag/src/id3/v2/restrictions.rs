//! ID3v2.4 tag restrictions
//!
//! NOTE: See <https://id3.org/id3v2.4.0-structure> section 3.2, item d

/// Restrictions on the tag size
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagSizeRestrictions {
	/// No more than 128 frames and 1 MB total tag size
	#[default]
	Frames128Size1M,
	/// No more than 64 frames and 128 KB total tag size
	Frames64Size128K,
	/// No more than 32 frames and 40 KB total tag size
	Frames32Size40K,
	/// No more than 32 frames and 4 KB total tag size
	Frames32Size4K,
}

/// Restrictions on text field sizes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSizeRestrictions {
	/// No longer than 1024 characters
	Chars1024,
	/// No longer than 128 characters
	Chars128,
	/// No longer than 30 characters
	Chars30,
}

/// Restrictions on all image sizes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSizeRestrictions {
	/// All images are 256x256 or smaller
	Max256,
	/// All images are 64x64 or smaller
	Max64,
	/// All images are **exactly** 64x64
	Exactly64,
}

/// Restrictions on the content of an ID3v2.4 tag
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagRestrictions {
	/// Restriction on the size of the tag. See [`TagSizeRestrictions`]
	pub size: TagSizeRestrictions,
	/// Text encoding restrictions
	///
	/// `false` - No restrictions
	/// `true` - Strings are only encoded with [`TextEncoding::Latin1`](crate::TextEncoding::Latin1) or [`TextEncoding::UTF8`](crate::TextEncoding::UTF8)
	pub text_encoding: bool,
	/// Restrictions on all text field sizes. See [`TextSizeRestrictions`]
	pub text_fields_size: Option<TextSizeRestrictions>,
	/// Image encoding restrictions
	///
	/// `false` - No restrictions
	/// `true` - Images can only be `PNG` or `JPEG`
	pub image_encoding: bool,
	/// Restrictions on all image sizes. See [`ImageSizeRestrictions`]
	pub image_size: Option<ImageSizeRestrictions>,
}

impl TagRestrictions {
	/// Read a [`TagRestrictions`] from the restrictions byte of an extended header
	pub fn from_byte(byte: u8) -> Self {
		// xx000000
		let size = match byte >> 6 {
			1 => TagSizeRestrictions::Frames64Size128K,
			2 => TagSizeRestrictions::Frames32Size40K,
			3 => TagSizeRestrictions::Frames32Size4K,
			_ => TagSizeRestrictions::Frames128Size1M,
		};

		// 000xx000
		let text_fields_size = match (byte >> 3) & 0x03 {
			1 => Some(TextSizeRestrictions::Chars1024),
			2 => Some(TextSizeRestrictions::Chars128),
			3 => Some(TextSizeRestrictions::Chars30),
			_ => None,
		};

		// 000000xx
		let image_size = match byte & 0x03 {
			1 => Some(ImageSizeRestrictions::Max256),
			2 => Some(ImageSizeRestrictions::Max64),
			3 => Some(ImageSizeRestrictions::Exactly64),
			_ => None,
		};

		TagRestrictions {
			size,
			// 00x00000
			text_encoding: byte & 0x20 == 0x20,
			text_fields_size,
			// 00000x00
			image_encoding: byte & 0x04 == 0x04,
			image_size,
		}
	}
}
