use crate::error::Result;
use crate::id3::v2::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, read_until_terminator_or_end};

use std::io::Read;

/// An `ID3v2` involved people list
///
/// This is used in the ID3v2.2 "IPL", ID3v2.3 "IPLS", and the ID3v2.4 "TIPL" and "TMCL" frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvolvedPeopleListFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// (role, person) pairs
	pub people: Vec<(String, String)>,
}

impl InvolvedPeopleListFrame {
	/// Read an [`InvolvedPeopleListFrame`] from a frame body of `body_len` bytes
	///
	/// A trailing role without a person is paired with an empty string.
	pub(crate) fn parse<R>(reader: &mut R, body_len: usize, header: FrameHeader) -> Result<Self>
	where
		R: Read,
	{
		let encoding = TextEncoding::read(reader)?;
		let mut remaining = super::shrink_budget(body_len, 1)?;

		let mut options = TextDecodeOptions::new().encoding(encoding);
		let mut people = Vec::new();

		while remaining > 0 {
			let role = read_until_terminator_or_end(reader, remaining, options)?;
			remaining = super::shrink_budget(remaining, role.bytes_read)?;

			// Only the first string is guaranteed to have a BOM
			if options.bom == [0, 0] {
				options = options.bom(role.bom);
			}

			if remaining == 0 {
				// Trailing padding
				if role.content.is_empty() {
					break;
				}

				log::warn!("Found an unpaired role in an involved people list, pairing with an empty person");
				people.push((role.content, String::new()));
				break;
			}

			let person = read_until_terminator_or_end(reader, remaining, options)?;
			remaining = super::shrink_budget(remaining, person.bytes_read)?;

			people.push((role.content, person.content));
		}

		Ok(Self {
			header,
			encoding,
			people,
		})
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
