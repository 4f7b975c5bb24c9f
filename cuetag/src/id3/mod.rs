//! ID3 specific items
//!
//! A file may carry an ID3v2 tag at its start, an ID3v1 tag in its last 128 bytes, or both.
//! The two are read independently. An error in the ID3v2 tag fails [`read_from`] and [`read_all`].
//! Pass [`ParseOptions::read_id3v2`] as `false` to still reach the ID3v1 tag.
//!
//! Check the other modules for important notes and/or warnings.

pub mod v1;
pub mod v2;

use crate::config::ParseOptions;
use crate::error::Result;
use v1::Id3v1Tag;
use v1::read::find_id3v1;
use v2::header::Id3v2Header;
use v2::{Id3v2Tag, Id3v2Version};

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Every ID3 version that can be detected
///
/// The ordering follows the version numbers, so the highest version is the greatest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Id3Version {
	/// ID3v1.0, or an ID3v1.1 tag without a track number
	V1,
	/// ID3v1.1
	V1_1,
	/// ID3v2.2
	V2_2,
	/// ID3v2.3
	V2_3,
	/// ID3v2.4
	V2_4,
}

impl Id3Version {
	/// Whether this is an ID3v2 version
	pub fn is_id3v2(self) -> bool {
		matches!(self, Self::V2_2 | Self::V2_3 | Self::V2_4)
	}
}

impl From<Id3v2Version> for Id3Version {
	fn from(version: Id3v2Version) -> Self {
		match version {
			Id3v2Version::V2 => Self::V2_2,
			Id3v2Version::V3 => Self::V2_3,
			Id3v2Version::V4 => Self::V2_4,
		}
	}
}

impl From<v1::Id3v1Revision> for Id3Version {
	fn from(revision: v1::Id3v1Revision) -> Self {
		match revision {
			v1::Id3v1Revision::V1 => Self::V1,
			v1::Id3v1Revision::V1_1 => Self::V1_1,
		}
	}
}

/// A decoded tag of either major version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Id3Tag {
	/// An ID3v1 tag
	Id3v1(Id3v1Tag),
	/// An ID3v2 tag
	Id3v2(Id3v2Tag),
}

impl Id3Tag {
	/// The version of the tag
	pub fn version(&self) -> Id3Version {
		match self {
			Id3Tag::Id3v1(tag) => tag.revision.into(),
			Id3Tag::Id3v2(tag) => tag.version().into(),
		}
	}
}

/// Only peeks at the ID3v2 signature and major version, the caller restores the position
fn detect_id3v2<R>(reader: &mut R) -> Result<Option<Id3Version>>
where
	R: Read + Seek,
{
	reader.seek(SeekFrom::Start(0))?;

	let mut header = [0; 5];
	let mut read = 0;
	while read < header.len() {
		match reader.read(&mut header[read..])? {
			0 => return Ok(None),
			n => read += n,
		}
	}

	if &header[..3] != b"ID3" {
		return Ok(None);
	}

	Ok(Id3v2Version::from_major(header[3]).map(Id3Version::from))
}

fn detect_id3v1<R>(reader: &mut R) -> Result<Option<Id3Version>>
where
	R: Read + Seek,
{
	Ok(find_id3v1(reader)?.map(|bytes| {
		if bytes[125] == 0 && bytes[126] != 0 {
			Id3Version::V1_1
		} else {
			Id3Version::V1
		}
	}))
}

/// Runs `f`, restoring the reader position afterwards, even on failure
fn restoring_position<R, T>(reader: &mut R, f: impl FnOnce(&mut R) -> Result<T>) -> Result<T>
where
	R: Seek,
{
	let start = reader.stream_position()?;
	let ret = f(reader);
	reader.seek(SeekFrom::Start(start))?;
	ret
}

/// Detect every ID3 version present in `reader`
///
/// ID3v2 (at the start of the stream) is listed before ID3v1 (at the end).
/// The reader position is restored afterwards.
///
/// # Errors
///
/// * Unable to seek or read
///
/// # Examples
///
/// ```rust
/// use cuetag::id3::{detect_versions, Id3Version};
/// use std::io::Cursor;
///
/// # fn main() -> cuetag::error::Result<()> {
/// let mut file = Cursor::new(b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec());
/// assert_eq!(detect_versions(&mut file)?, vec![Id3Version::V2_4]);
/// # Ok(()) }
/// ```
pub fn detect_versions<R>(reader: &mut R) -> Result<Vec<Id3Version>>
where
	R: Read + Seek,
{
	restoring_position(reader, |reader| {
		let mut versions = Vec::new();
		versions.extend(detect_id3v2(reader)?);
		versions.extend(detect_id3v1(reader)?);

		log::debug!("Detected ID3 versions: {:?}", versions);
		Ok(versions)
	})
}

/// Whether `reader` starts with a supported ID3v2 tag
///
/// NOTE: The tag isn't decoded, it may still fail to read.
///
/// # Errors
///
/// * Unable to seek or read
pub fn has_id3v2<R>(reader: &mut R) -> Result<bool>
where
	R: Read + Seek,
{
	restoring_position(reader, |reader| Ok(detect_id3v2(reader)?.is_some()))
}

/// Whether `reader` ends with an ID3v1 tag
///
/// # Errors
///
/// * Unable to seek or read
pub fn has_id3v1<R>(reader: &mut R) -> Result<bool>
where
	R: Read + Seek,
{
	restoring_position(reader, |reader| Ok(detect_id3v1(reader)?.is_some()))
}

/// Select the version to read out of a set of detected versions
///
/// When a file has both, ID3v2 is preferred.
///
/// # Examples
///
/// ```rust
/// use cuetag::id3::{select_version, Id3Version};
///
/// assert_eq!(
/// 	select_version(&[Id3Version::V2_3, Id3Version::V1_1]),
/// 	Some(Id3Version::V2_3)
/// );
/// assert_eq!(select_version(&[]), None);
/// ```
pub fn select_version(versions: &[Id3Version]) -> Option<Id3Version> {
	versions.iter().copied().max()
}

fn read_v2<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v2Tag>>
where
	R: Read + Seek,
{
	if !parse_options.read_id3v2 {
		return Ok(None);
	}

	reader.seek(SeekFrom::Start(0))?;
	let mut reader = BufReader::new(reader);
	let Some(header) = Id3v2Header::parse(&mut reader)? else {
		return Ok(None);
	};

	v2::read::parse_id3v2(&mut reader, header, parse_options).map(Some)
}

fn read_v1<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v1Tag>>
where
	R: Read + Seek,
{
	if !parse_options.read_id3v1 {
		return Ok(None);
	}

	Ok(find_id3v1(reader)?.map(|bytes| Id3v1Tag::parse(&bytes)))
}

/// Read the preferred tag out of `reader`
///
/// This reads the ID3v2 tag if there is one (and [`ParseOptions::read_id3v2`] is set),
/// otherwise the ID3v1 tag. See [`select_version`].
///
/// The reader position is restored afterwards.
///
/// # Errors
///
/// * Unable to seek or read
/// * The selected tag fails to decode
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Id3Tag>>
where
	R: Read + Seek,
{
	restoring_position(reader, |reader| {
		if let Some(tag) = read_v2(reader, parse_options)? {
			return Ok(Some(Id3Tag::Id3v2(tag)));
		}

		Ok(read_v1(reader, parse_options)?.map(Id3Tag::Id3v1))
	})
}

/// Read every tag out of `reader`
///
/// The ID3v2 tag comes first, if any. The reader position is restored afterwards.
///
/// # Errors
///
/// * Unable to seek or read
/// * Either tag fails to decode
pub fn read_all<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Vec<Id3Tag>>
where
	R: Read + Seek,
{
	restoring_position(reader, |reader| {
		let mut tags = Vec::new();
		tags.extend(read_v2(reader, parse_options)?.map(Id3Tag::Id3v2));
		tags.extend(read_v1(reader, parse_options)?.map(Id3Tag::Id3v1));
		Ok(tags)
	})
}

/// Read the preferred tag from a file at `path`
///
/// See [`read_from`].
///
/// # Errors
///
/// * `path` doesn't exist, or can't be opened
/// * See [`read_from`]
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<Option<Id3Tag>>
where
	P: AsRef<Path>,
{
	let mut file = File::open(path)?;
	read_from(&mut file, parse_options)
}
