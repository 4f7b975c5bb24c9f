use super::frame::Frame;
use super::header::{Id3v2Header, Id3v2TagFlags, Id3v2Version};
use super::items::{CommentFrame, PictureFrame};
use crate::id3::v2::dictionary::CanonicalFrameType;

use std::borrow::Cow;

const V4_MULTI_VALUE_SEPARATOR: char = '\0';

const TITLE_TYPE: CanonicalFrameType = CanonicalFrameType::Title;
const ARTIST_TYPE: CanonicalFrameType = CanonicalFrameType::Performer;
const ALBUM_TYPE: CanonicalFrameType = CanonicalFrameType::Album;
const GENRE_TYPE: CanonicalFrameType = CanonicalFrameType::ContentType;

// Used exclusively for the convenience accessors
fn remove_separators_from_frame_text(value: &str, version: Id3v2Version) -> Cow<'_, str> {
	if !value.contains(V4_MULTI_VALUE_SEPARATOR) || version != Id3v2Version::V4 {
		return Cow::Borrowed(value);
	}

	return Cow::Owned(value.replace(V4_MULTI_VALUE_SEPARATOR, "/"));
}

macro_rules! impl_accessor {
	($($name:ident),+ $(,)?) => {
		paste::paste! {
			$(
				#[doc = "Get the " $name ", if any"]
				///
				/// Multiple ID3v2.4 values are joined with `/`.
				pub fn $name(&self) -> Option<Cow<'_, str>> {
					if let Some(value) = self.get_text([<$name:upper _TYPE>]) {
						return Some(remove_separators_from_frame_text(value, self.header.version));
					}

					None
				}
			)+
		}
	}
}

/// An `ID3v2` tag
///
/// Frames are kept in the order they appear in the file, and duplicates are kept.
///
/// ## Conversions
///
/// Frames are never converted between versions. Use [`Frame::frame_type`] (or the lookups on
/// this type) to find frames regardless of the identifier they were stored under.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Id3v2Tag {
	pub(crate) header: Id3v2Header,
	pub(crate) frames: Vec<Frame>,
}

impl Default for Id3v2Tag {
	fn default() -> Self {
		Self {
			header: Id3v2Header {
				version: Id3v2Version::V4,
				revision: 0,
				flags: Id3v2TagFlags::default(),
				size: 0,
			},
			frames: Vec::new(),
		}
	}
}

impl Id3v2Tag {
	/// The version the tag was read from
	pub fn version(&self) -> Id3v2Version {
		self.header.version
	}

	/// The tag header, with the extended header data filled in
	pub fn header(&self) -> &Id3v2Header {
		&self.header
	}

	/// The tag's flags
	pub fn flags(&self) -> &Id3v2TagFlags {
		&self.header.flags
	}

	/// Every frame, in file order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Get the first frame of `frame_type`
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::id3::v2::{CanonicalFrameType, Id3v2Tag};
	///
	/// let tag = Id3v2Tag::default();
	/// assert!(tag.get(CanonicalFrameType::Title).is_none());
	/// ```
	pub fn get(&self, frame_type: CanonicalFrameType) -> Option<&Frame> {
		self.frames
			.iter()
			.find(|frame| frame.frame_type() == frame_type)
	}

	/// Get every frame of `frame_type`
	pub fn get_all(&self, frame_type: CanonicalFrameType) -> impl Iterator<Item = &Frame> {
		self.frames
			.iter()
			.filter(move |frame| frame.frame_type() == frame_type)
	}

	/// Get the text of the first text frame of `frame_type`
	///
	/// NOTE: In ID3v2.4, a frame may hold multiple null separated values. See [`TextFrame::values`](crate::id3::v2::TextFrame::values)
	pub fn get_text(&self, frame_type: CanonicalFrameType) -> Option<&str> {
		self.get_all(frame_type).find_map(|frame| match frame {
			Frame::Text(text) => Some(text.value.as_str()),
			_ => None,
		})
	}

	impl_accessor!(title, artist, album, genre);

	/// Get the year of the recording
	///
	/// This checks the ID3v2.3 "TYER" frame, falling back to the ID3v2.4 "TDRC" frame.
	/// Only the leading 4 digit year is returned.
	pub fn year(&self) -> Option<u32> {
		let text = self
			.get_text(CanonicalFrameType::Year)
			.or_else(|| self.get_text(CanonicalFrameType::RecordingTime))?;

		let year = text.trim().get(..4)?;
		year.parse().ok()
	}

	/// Get the track number
	///
	/// The "TRCK" frame may be stored as "track/total", only the track is returned.
	pub fn track(&self) -> Option<u32> {
		let text = self.get_text(CanonicalFrameType::TrackNumber)?;
		let track = text.split('/').next()?;
		track.trim().parse().ok()
	}

	/// Get the total number of tracks, if it was stored in the "TRCK" frame
	pub fn track_total(&self) -> Option<u32> {
		let text = self.get_text(CanonicalFrameType::TrackNumber)?;
		let (_, total) = text.split_once('/')?;
		total.trim().parse().ok()
	}

	/// Get the first comment
	///
	/// Comments with an empty description are preferred, as they're meant to be the "main" comment.
	pub fn comment(&self) -> Option<&CommentFrame> {
		let mut comments = self
			.get_all(CanonicalFrameType::Comment)
			.filter_map(|frame| match frame {
				Frame::Comment(comment) => Some(comment),
				_ => None,
			})
			.peekable();

		let first = *comments.peek()?;
		Some(
			comments
				.find(|comment| comment.description.is_empty())
				.unwrap_or(first),
		)
	}

	/// Iterate over every attached picture
	pub fn pictures(&self) -> impl Iterator<Item = &PictureFrame> {
		self.frames.iter().filter_map(|frame| match frame {
			Frame::Picture(picture) => Some(picture),
			_ => None,
		})
	}
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}
