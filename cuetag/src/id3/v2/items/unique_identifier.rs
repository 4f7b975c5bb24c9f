use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::macros::try_vec;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_until_terminator};

use std::io::Read;

/// Read a null terminated Latin-1 owner followed by a binary payload
fn parse_owner_and_payload<R>(reader: &mut R, body_len: usize) -> Result<(String, Vec<u8>)>
where
	R: Read,
{
	let owner = read_until_terminator(
		reader,
		body_len,
		TextDecodeOptions::new().encoding(TextEncoding::Latin1),
	)?;

	let remaining = super::shrink_budget(body_len, owner.bytes_read)?;
	let mut payload = try_vec![0; remaining];
	reader.read_exact(&mut payload)?;

	Ok((owner.content, payload))
}

/// An `ID3v2` unique file identifier frame (UFID)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniqueFileIdentifierFrame {
	pub(crate) header: FrameHeader,
	/// The owner of the frame, typically a URL
	pub owner: String,
	/// The binary identifier, at most 64 bytes
	pub identifier: Vec<u8>,
}

impl UniqueFileIdentifierFrame {
	/// Read a [`UniqueFileIdentifierFrame`] from a frame body of `body_len` bytes
	///
	/// # Errors
	///
	/// The owner isn't null terminated
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let (owner, identifier) = parse_owner_and_payload(reader, body_len)?;
		Ok(Self {
			header,
			owner,
			identifier,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}

/// An `ID3v2` music CD identifier frame (MCDI)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MusicCdIdentifierFrame {
	pub(crate) header: FrameHeader,
	/// The owner identifier
	pub owner: String,
	/// The binary CD table of contents
	pub toc: Vec<u8>,
}

impl MusicCdIdentifierFrame {
	/// Read a [`MusicCdIdentifierFrame`] from a frame body of `body_len` bytes
	///
	/// # Errors
	///
	/// The owner isn't null terminated
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let (owner, toc) = parse_owner_and_payload(reader, body_len)?;
		Ok(Self { header, owner, toc })
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
