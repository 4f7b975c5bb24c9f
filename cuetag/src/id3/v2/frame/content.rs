use crate::error::Result;
use crate::id3::v2::dictionary::BodyGrammar;
use crate::id3::v2::frame::Frame;
use crate::id3::v2::frame::header::FrameHeader;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::items::{
	CommentFrame, InvolvedPeopleListFrame, MusicCdIdentifierFrame, PictureFrame,
	PodcastMarkerFrame, RawFrame, TextFrame, UniqueFileIdentifierFrame, UrlFrame, UserTextFrame,
	UserUrlFrame,
};
use crate::util::text::TextEncoding;

/// Decode a frame body with the grammar of its canonical type
///
/// `content` is the body with unsynchronisation and compression already undone, and
/// every byte of it must be accounted for by the grammar.
#[rustfmt::skip]
pub(super) fn parse_content(
	content: &[u8],
	header: FrameHeader,
	version: Id3v2Version,
) -> Result<Frame> {
	log::trace!("Parsing frame content for ID: {}", header.id);

	let reader = &mut &content[..];
	let len = content.len();

	Ok(match header.frame_type.grammar() {
		BodyGrammar::Text => TextFrame::parse(reader, len, header)?.into(),
		BodyGrammar::Url => UrlFrame::parse(reader, len, header)?.into(),
		BodyGrammar::Comment => CommentFrame::parse(reader, len, header)?.into(),
		BodyGrammar::Picture => PictureFrame::parse(reader, len, header, version)?.into(),
		BodyGrammar::UniqueFileIdentifier => UniqueFileIdentifierFrame::parse(reader, len, header)?.into(),
		BodyGrammar::MusicCdIdentifier => MusicCdIdentifierFrame::parse(reader, len, header)?.into(),
		BodyGrammar::InvolvedPeople => InvolvedPeopleListFrame::parse(reader, len, header)?.into(),
		BodyGrammar::UserText => UserTextFrame::parse(reader, len, header)?.into(),
		BodyGrammar::UserUrl => UserUrlFrame::parse(reader, len, header)?.into(),
		BodyGrammar::PodcastMarker => PodcastMarkerFrame::parse(reader, len, header)?.into(),
		BodyGrammar::Raw => raw(content, header),
	})
}

/// Decode the body of an identifier missing from the dictionary
///
/// "T..." and "W..." identifiers are read as user defined frames described by their identifier.
pub(super) fn parse_unknown_content(content: &[u8], header: FrameHeader) -> Result<Frame> {
	let reader = &mut &content[..];
	let len = content.len();
	let description = header.id.as_str().to_owned();

	Ok(match header.id.as_str().as_bytes().first() {
		Some(b'T') => {
			let TextFrame {
				header,
				encoding,
				value,
			} = TextFrame::parse(reader, len, header)?;
			UserTextFrame {
				header,
				encoding,
				description,
				content: value,
			}
			.into()
		},
		Some(b'W') => {
			let UrlFrame { header, url } = UrlFrame::parse(reader, len, header)?;
			UserUrlFrame {
				header,
				encoding: TextEncoding::Latin1,
				description,
				url,
			}
			.into()
		},
		_ => raw(content, header),
	})
}

pub(super) fn raw(content: &[u8], header: FrameHeader) -> Frame {
	Frame::Raw(RawFrame {
		header,
		data: content.to_vec(),
	})
}
