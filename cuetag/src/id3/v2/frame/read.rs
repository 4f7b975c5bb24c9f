use super::Frame;
use super::content::{parse_content, parse_unknown_content, raw};
use super::header::{FrameHeader, FrameId, RawFrameHeader};
use crate::config::{ParseOptions, global_options};
use crate::error::Result;
use crate::id3::v2::FrameFlags;
use crate::id3::v2::dictionary::{BodyGrammar, CanonicalFrameType, canonical_type_for};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::util::synchsafe::{SizeEncoding, resynchronise};
use crate::macros::{err, id3v2_err};

use std::borrow::Cow;

use byteorder::{BigEndian, ReadBytesExt};

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	Eof,
}

/// How a frame identifier was resolved
enum Resolved {
	Known(FrameId, CanonicalFrameType),
	/// Missing from the dictionary, but still decodable
	Unknown(FrameId, CanonicalFrameType),
	Skip,
}

impl ParsedFrame {
	/// Read the next frame out of the remaining tag content
	///
	/// `reader` is advanced past the entire frame, including when it is skipped.
	pub(crate) fn read(
		reader: &mut &[u8],
		version: Id3v2Version,
		parse_options: ParseOptions,
	) -> Result<Self> {
		let layout = version.frame_layout();
		let Some(raw_header) = RawFrameHeader::read(reader, layout)? else {
			log::trace!("Reached the padding, stopping");
			return Ok(Self::Eof);
		};

		let body_size = raw_header.body_size;
		if body_size as usize > reader.len() {
			err!(TruncatedInput);
		}

		let (mut body, rest) = reader.split_at(body_size as usize);
		*reader = rest;

		let (id, frame_type, unknown) = match resolve_id(raw_header.id_bytes(), version, parse_options)
		{
			Resolved::Known(id, frame_type) => (id, frame_type, false),
			Resolved::Unknown(id, frame_type) => (id, frame_type, true),
			Resolved::Skip => return Ok(Self::Skip),
		};

		log::trace!("Found frame {} ({} bytes)", id, body_size);

		if body_size == 0 {
			log::debug!("Encountered a zero length frame ({}), skipping", id);
			return Ok(Self::Skip);
		}

		if !parse_options.read_cover_art && frame_type.grammar() == BodyGrammar::Picture {
			log::trace!("Skipping picture frame");
			return Ok(Self::Skip);
		}

		if body_size as usize > global_options().allocation_limit {
			err!(TooMuchData);
		}

		let mut flags = FrameFlags::parse(version, raw_header.flags, frame_type);

		read_extra_header_data(&mut body, version, &mut flags)?;

		// Frames must have at least 1 byte *after* all of the additional data
		if body.is_empty() {
			id3v2_err!(BadFrameLength);
		}

		let header = FrameHeader {
			id,
			frame_type,
			size: layout.header_len() as u32 + body_size,
			flags,
		};

		let mut content = Cow::Borrowed(body);
		if flags.unsynchronisation {
			content = Cow::Owned(resynchronise(&content)?);
		}

		// Nothing further we can do with encrypted frames
		if flags.encryption.is_some() {
			log::debug!("Keeping encrypted frame {} undecoded", header.id);
			return Ok(Self::Next(raw(&content, header)));
		}

		if flags.compression {
			match decompress(&content)? {
				Some(decompressed) => content = Cow::Owned(decompressed),
				None => {
					log::warn!("Keeping compressed frame {} undecoded", header.id);
					return Ok(Self::Next(raw(&content, header)));
				},
			}
		}

		let frame = if unknown {
			parse_unknown_content(&content, header)?
		} else {
			parse_content(&content, header, version)?
		};

		Ok(Self::Next(frame))
	}
}

fn resolve_id(id_bytes: &[u8], version: Id3v2Version, parse_options: ParseOptions) -> Resolved {
	let mut lookup_version = version;
	let mut id_bytes = id_bytes;

	// Some ID3v2.3 writers store ID3v2.2 identifiers with a trailing null
	if version == Id3v2Version::V3 && id_bytes[3] == 0 {
		id_bytes = &id_bytes[..3];
		lookup_version = Id3v2Version::V2;
	}

	let Some(id) = FrameId::from_bytes(id_bytes) else {
		log::warn!(
			"Skipping frame with an invalid identifier: {:?}",
			String::from_utf8_lossy(id_bytes)
		);
		return Resolved::Skip;
	};

	if let Some(frame_type) = canonical_type_for(id.as_str(), lookup_version) {
		return Resolved::Known(id, frame_type);
	}

	match id.as_str().as_bytes()[0] {
		b'T' => Resolved::Unknown(id, CanonicalFrameType::UserDefinedText),
		b'W' => Resolved::Unknown(id, CanonicalFrameType::UserDefinedUrl),
		_ if parse_options.keep_unknown_frames => {
			log::debug!("Keeping unknown frame {}", id);
			Resolved::Known(id, CanonicalFrameType::Unrecognised)
		},
		_ => {
			log::warn!("Skipping unknown frame {}", id);
			Resolved::Skip
		},
	}
}

/// Consume the extra header bytes that some flags add to the start of the body
fn read_extra_header_data(
	body: &mut &[u8],
	version: Id3v2Version,
	flags: &mut FrameFlags,
) -> Result<()> {
	fn take<'a>(body: &mut &'a [u8], len: usize) -> Result<&'a [u8]> {
		if body.len() < len {
			id3v2_err!(BadFrameLength);
		}

		let (taken, rest) = body.split_at(len);
		*body = rest;
		Ok(taken)
	}

	match version {
		Id3v2Version::V2 => {},
		Id3v2Version::V3 => {
			if flags.compression {
				log::trace!("Reading decompressed size");
				let len = take(body, 4)?.read_u32::<BigEndian>()?;
				flags.data_length_indicator = Some(len);
			}

			if let Some(method) = flags.encryption.as_mut() {
				log::trace!("Reading encryption method symbol");
				*method = take(body, 1)?[0];
			}

			if let Some(group) = flags.group_id.as_mut() {
				log::trace!("Reading group identifier");
				*group = take(body, 1)?[0];
			}
		},
		Id3v2Version::V4 => {
			if let Some(group) = flags.group_id.as_mut() {
				log::trace!("Reading group identifier");
				*group = take(body, 1)?[0];
			}

			if let Some(method) = flags.encryption.as_mut() {
				log::trace!("Reading encryption method symbol");
				*method = take(body, 1)?[0];
			}

			if let Some(len) = flags.data_length_indicator.as_mut() {
				log::trace!("Reading data length indicator");
				*len = SizeEncoding::Synchsafe.decode(take(body, 4)?)?;
			}
		},
	}

	Ok(())
}

/// Inflate a zlib compressed frame body
///
/// Returns `None` if compression support is disabled.
#[cfg(feature = "id3v2_compression_support")]
fn decompress(content: &[u8]) -> Result<Option<Vec<u8>>> {
	use crate::error::Id3v2Error;
	use crate::error::Id3v2ErrorKind;

	use std::io::Read;

	let limit = global_options().allocation_limit;

	let mut decompressed = Vec::new();
	flate2::read::ZlibDecoder::new(content)
		.take(limit as u64 + 1)
		.read_to_end(&mut decompressed)
		.map_err(|e| Id3v2Error::new(Id3v2ErrorKind::Decompression(e.to_string())))?;

	if decompressed.len() > limit {
		err!(TooMuchData);
	}

	Ok(Some(decompressed))
}

#[cfg(not(feature = "id3v2_compression_support"))]
#[allow(clippy::unnecessary_wraps)]
fn decompress(_: &[u8]) -> Result<Option<Vec<u8>>> {
	Ok(None)
}
