use super::frame::read::ParsedFrame;
use super::header::Id3v2Header;
use super::tag::Id3v2Tag;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v2::util::synchsafe::resynchronise;
use crate::macros::err;

use std::borrow::Cow;
use std::io::Read;

/// Read an ID3v2 tag from the current position of `reader`
///
/// Returns `Ok(None)` if no supported tag starts there.
///
/// # Errors
///
/// * The header or extended header is invalid
/// * A frame fails to decode
/// * The input ends before the declared tag size
///
/// # Examples
///
/// ```rust
/// use cuetag::config::ParseOptions;
/// use cuetag::id3::v2::{read_id3v2, Id3v2Version};
///
/// # fn main() -> cuetag::error::Result<()> {
/// let bytes = b"ID3\x03\x00\x00\x00\x00\x00\x10TIT2\x00\x00\x00\x06\x00\x00\x00Title";
///
/// let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())?.expect("tag should be present");
/// assert_eq!(tag.version(), Id3v2Version::V3);
/// assert_eq!(tag.title().as_deref(), Some("Title"));
/// # Ok(()) }
/// ```
pub fn read_id3v2<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v2Tag>>
where
	R: Read,
{
	let Some(header) = Id3v2Header::parse(reader)? else {
		return Ok(None);
	};

	parse_id3v2(reader, header, parse_options).map(Some)
}

/// Read the tag contents following an already parsed `header`
///
/// Exactly `header.size` bytes are consumed from `reader` (the footer, if any, is left alone).
pub(crate) fn parse_id3v2<R>(
	reader: &mut R,
	mut header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag>
where
	R: Read,
{
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}",
		header.size,
		header.version
	);

	// Grows with the bytes actually read, never with the declared size
	let mut tag_bytes = Vec::new();
	reader
		.by_ref()
		.take(u64::from(header.size))
		.read_to_end(&mut tag_bytes)?;
	if tag_bytes.len() < header.size as usize {
		log::debug!(
			"Tag declares {} bytes, only {} available",
			header.size,
			tag_bytes.len()
		);
		err!(TruncatedInput);
	}

	let mut content = Cow::Borrowed(&tag_bytes[..]);
	if header.flags.unsynchronisation {
		content = Cow::Owned(resynchronise(&tag_bytes)?);
	}

	let mut remaining = &content[..];
	if header.flags.extended_header {
		let extended_size = header.parse_extended_header(&mut remaining)?;
		log::trace!("Skipped {} bytes of extended header", extended_size);
	}

	let mut tag = Id3v2Tag {
		header,
		frames: Vec::new(),
	};

	let frame_header_len = header.version.frame_layout().header_len();
	while remaining.len() >= frame_header_len {
		match ParsedFrame::read(&mut remaining, header.version, parse_options)? {
			ParsedFrame::Next(frame) => {
				log::trace!("Read {} frame {}", frame.name(), frame.id());
				tag.frames.push(frame);
			},
			// The frame has already been consumed
			ParsedFrame::Skip => {},
			ParsedFrame::Eof => break,
		}
	}

	if !remaining.is_empty() {
		log::trace!("Discarding {} bytes of padding", remaining.len());
	}

	Ok(tag)
}
