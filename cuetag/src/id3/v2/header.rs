use crate::error::Result;
use crate::id3::v2::restrictions::TagRestrictions;
use crate::id3::v2::util::synchsafe::SizeEncoding;
use crate::macros::id3v2_err;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// Get the version from a major version byte
	pub fn from_major(major: u8) -> Option<Self> {
		match major {
			2 => Some(Self::V2),
			3 => Some(Self::V3),
			4 => Some(Self::V4),
			_ => None,
		}
	}

	/// The major version byte
	pub fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}

	pub(crate) fn frame_layout(self) -> FrameLayout {
		match self {
			Self::V2 => FrameLayout {
				id_len: 3,
				size_len: 3,
				size_encoding: SizeEncoding::Plain,
				has_flags: false,
			},
			Self::V3 => FrameLayout {
				id_len: 4,
				size_len: 4,
				size_encoding: SizeEncoding::Plain,
				has_flags: true,
			},
			Self::V4 => FrameLayout {
				id_len: 4,
				size_len: 4,
				size_encoding: SizeEncoding::Synchsafe,
				has_flags: true,
			},
		}
	}
}

/// The shape of a frame header in a specific version
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameLayout {
	pub id_len: usize,
	pub size_len: usize,
	pub size_encoding: SizeEncoding,
	pub has_flags: bool,
}

impl FrameLayout {
	pub(crate) fn header_len(self) -> usize {
		self.id_len + self.size_len + if self.has_flags { 2 } else { 0 }
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether or not the tag is unsynchronised. See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation)
	pub unsynchronisation: bool,
	/// Whether an extended header follows the tag header
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer (ID3v2.4 only)
	pub footer: bool,
	/// Indicates that the tag is an update of an earlier tag (ID3v2.4 only)
	pub update: bool,
	/// The CRC-32 stored in the extended header, if any
	///
	/// ID3v2.4 stores it as a 35-bit synchsafe integer, so all 35 bits are kept.
	pub crc: Option<u64>,
	/// The amount of padding declared in the extended header (ID3v2.3 only)
	pub padding_size: u32,
	/// Restrictions on the tag, stored in the extended header (ID3v2.4 only)
	pub restrictions: Option<TagRestrictions>,
}

/// The fixed 10 byte tag header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The major version
	pub version: Id3v2Version,
	/// The revision byte
	pub revision: u8,
	/// The tag flags
	///
	/// Extended header flags are filled in once the extended header is read.
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	/// The size of the header on disk
	pub const LEN: usize = 10;

	/// Read a tag header
	///
	/// Returns `Ok(None)` if the signature is missing or the major version is unknown.
	///
	/// # Errors
	///
	/// * The signature is present, but the input ends before the 10 header bytes
	/// * The declared size isn't a valid synchsafe integer
	/// * The tag is an ID3v2.2 tag with its compression flag set
	pub fn parse<R>(reader: &mut R) -> Result<Option<Self>>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = Vec::with_capacity(Self::LEN);
		reader.take(Self::LEN as u64).read_to_end(&mut header)?;

		if header.len() < 3 || &header[..3] != b"ID3" {
			log::debug!("No ID3v2 signature found");
			return Ok(None);
		}

		if header.len() < Self::LEN {
			crate::macros::err!(TruncatedInput);
		}

		let Some(version) = Id3v2Version::from_major(header[3]) else {
			log::debug!(
				"Found an unsupported ID3v2 version (v2.{}.{})",
				header[3],
				header[4]
			);
			return Ok(None);
		};
		let revision = header[4];

		let flags = header[5];

		// Bit 6 is compression in ID3v2.2, which never got a defined scheme
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			id3v2_err!(V2Compression);
		}

		let has_extended = version != Id3v2Version::V2;
		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended_header: has_extended && flags & 0x40 == 0x40,
			experimental: has_extended && flags & 0x20 == 0x20,
			footer: version == Id3v2Version::V4 && flags & 0x10 == 0x10,
			..Id3v2TagFlags::default()
		};

		let size = SizeEncoding::Synchsafe.decode(&header[6..10])?;

		log::debug!(
			"Found an ID3v2 tag, version: {:?}, revision: {}, size: {}",
			version,
			revision,
			size
		);

		Ok(Some(Id3v2Header {
			version,
			revision,
			flags: flags_parsed,
			size,
		}))
	}

	/// The total size of the tag, including the header and footer
	pub fn full_tag_size(&self) -> u64 {
		u64::from(self.size) + 10 + if self.flags.footer { 10 } else { 0 }
	}

	/// Read the extended header, updating the tag flags
	///
	/// Returns the number of bytes consumed.
	pub(crate) fn parse_extended_header<R>(&mut self, reader: &mut R) -> Result<u32>
	where
		R: Read,
	{
		let consumed = match self.version {
			Id3v2Version::V2 => return Ok(0),
			Id3v2Version::V3 => self.parse_v3_extended(reader)?,
			Id3v2Version::V4 => self.parse_v4_extended(reader)?,
		};

		if consumed >= self.size {
			id3v2_err!(InvalidExtendedHeader(
				"the extended header is larger than the tag"
			));
		}

		log::trace!("Read an extended header of {} bytes", consumed);
		Ok(consumed)
	}

	fn parse_v3_extended<R>(&mut self, reader: &mut R) -> Result<u32>
	where
		R: Read,
	{
		// The size excludes itself, and can only ever be 6 or 10
		let size = reader.read_u32::<BigEndian>()?;
		let extended_flags = reader.read_u16::<BigEndian>()?;
		self.flags.padding_size = reader.read_u32::<BigEndian>()?;

		let crc_present = extended_flags & 0x8000 == 0x8000;
		let expected_size = if crc_present { 10 } else { 6 };
		if size != expected_size {
			id3v2_err!(InvalidExtendedHeader(
				"ID3v2.3 extended header size disagrees with its CRC flag"
			));
		}

		if crc_present {
			self.flags.crc = Some(u64::from(reader.read_u32::<BigEndian>()?));
		}

		Ok(size + 4)
	}

	fn parse_v4_extended<R>(&mut self, reader: &mut R) -> Result<u32>
	where
		R: Read,
	{
		// The size includes itself
		let size = SizeEncoding::Synchsafe.read(reader, 4)?;
		if size < 6 {
			id3v2_err!(InvalidExtendedHeader(
				"ID3v2.4 extended header is smaller than 6 bytes"
			));
		}

		let flag_bytes = reader.read_u8()?;
		if flag_bytes != 1 {
			id3v2_err!(InvalidExtendedHeader(
				"ID3v2.4 extended header must have exactly 1 flag byte"
			));
		}

		let extended_flags = reader.read_u8()?;
		let mut consumed = 6;

		if extended_flags & 0x40 == 0x40 {
			if reader.read_u8()? != 0 {
				id3v2_err!(InvalidExtendedHeader("tag update flag data must be empty"));
			}

			self.flags.update = true;
			consumed += 1;
		}

		if extended_flags & 0x20 == 0x20 {
			if reader.read_u8()? != 5 {
				id3v2_err!(InvalidExtendedHeader("CRC data must be 5 bytes"));
			}

			let mut crc = [0; 5];
			reader.read_exact(&mut crc)?;
			self.flags.crc = Some(SizeEncoding::Synchsafe.decode_wide(&crc)?);
			consumed += 6;
		}

		if extended_flags & 0x10 == 0x10 {
			if reader.read_u8()? != 1 {
				id3v2_err!(InvalidExtendedHeader("tag restrictions must be 1 byte"));
			}

			self.flags.restrictions = Some(TagRestrictions::from_byte(reader.read_u8()?));
			consumed += 2;
		}

		if consumed > size {
			id3v2_err!(InvalidExtendedHeader(
				"ID3v2.4 extended header flag data exceeds its size"
			));
		}

		// Anything left is unknown flag data
		let leftover = u64::from(size - consumed);
		let skipped = std::io::copy(&mut reader.take(leftover), &mut std::io::sink())?;
		if skipped != leftover {
			crate::macros::err!(TruncatedInput);
		}

		Ok(size)
	}
}
