use super::constants::{GENRES, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use super::tag::{Id3v1Revision, Id3v1Tag};
use crate::error::Result;
use crate::util::io::SeekStreamLen;
use crate::util::text::latin1_decode;

use std::io::{Read, Seek, SeekFrom};

/// Read an ID3v1 tag from the last 128 bytes of `reader`
///
/// Returns `Ok(None)` if the reader is too small, or the `"TAG"` marker is missing.
///
/// NOTE: The reader position is restored afterwards.
///
/// # Errors
///
/// * Unable to seek or read
pub fn read_id3v1<R>(reader: &mut R) -> Result<Option<Id3v1Tag>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	let start = reader.stream_position()?;
	let tag = find_id3v1(reader);
	reader.seek(SeekFrom::Start(start))?;

	Ok(tag?.map(|bytes| Id3v1Tag::parse(&bytes)))
}

/// Read the trailing 128 bytes if they start with the ID3v1 marker
pub(crate) fn find_id3v1<R>(reader: &mut R) -> Result<Option<[u8; 128]>>
where
	R: Read + Seek,
{
	let len = reader.stream_len_hack()?;

	// Reader is too small to contain an ID3v1 tag
	if len < ID3V1_TAG_SIZE {
		return Ok(None);
	}

	reader.seek(SeekFrom::End(-(ID3V1_TAG_SIZE as i64)))?;

	let mut id3v1 = [0; 128];
	reader.read_exact(&mut id3v1)?;

	if id3v1[..3] != ID3V1_TAG_MARKER {
		return Ok(None);
	}

	log::debug!("Found an ID3v1 tag");
	Ok(Some(id3v1))
}

impl Id3v1Tag {
	/// Parse a tag from its 128 bytes
	///
	/// The marker is expected to have already been checked.
	pub(crate) fn parse(bytes: &[u8; 128]) -> Self {
		let reader = &bytes[3..];

		let mut tag = Self {
			title: decode_text(&reader[..30]),
			artist: decode_text(&reader[30..60]),
			album: decode_text(&reader[60..90]),
			year: try_parse_year(&reader[90..94]),
			..Self::default()
		};

		// Determine the range of the comment (30 bytes for ID3v1 and 28 for ID3v1.1)
		// We check for the null terminator 28 bytes in, and for a non-zero track number after it.
		// A track number of 0 is indistinguishable from an ID3v1.0 comment.
		let range = if reader[122] == 0 && reader[123] != 0 {
			tag.revision = Id3v1Revision::V1_1;
			tag.track_number = Some(reader[123]);

			94_usize..122
		} else {
			94..124
		};

		tag.comment = decode_text(&reader[range]);

		if usize::from(reader[124]) < GENRES.len() {
			tag.genre = Some(reader[124]);
		}

		tag
	}
}

fn decode_text(data: &[u8]) -> Option<String> {
	let mut first_null_pos = data.len();
	if let Some(null_pos) = data.iter().position(|&b| b == 0) {
		if data[null_pos..].iter().any(|b| *b != b'\0') {
			log::warn!("ID3v1 text field contains trailing junk, skipping");
		}

		first_null_pos = null_pos;
	}

	// Some writers pad with spaces instead of nulls
	let text = latin1_decode(&data[..first_null_pos]);
	let trimmed = text.trim_end_matches(' ');
	if trimmed.is_empty() {
		return None;
	}

	Some(trimmed.to_owned())
}

fn try_parse_year(input: &[u8]) -> Option<u16> {
	let (num_digits, year) = input
		.iter()
		.take_while(|c| (**c).is_ascii_digit())
		.fold((0usize, 0u16), |(num_digits, year), c| {
			(num_digits + 1, year * 10 + u16::from(*c - b'0'))
		});

	// Most writers use "\0\0\0\0" for empty years, rather than "0000"
	if num_digits != 4 {
		return None;
	}

	Some(year)
}
