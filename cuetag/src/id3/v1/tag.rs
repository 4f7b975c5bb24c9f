use crate::id3::v1::constants::GENRES;

use std::borrow::Cow;

macro_rules! impl_accessor {
	($($name:ident,)+) => {
		$(
			#[doc = concat!("Get the ", stringify!($name), ", if any")]
			pub fn $name(&self) -> Option<Cow<'_, str>> {
				if let Some(item) = self.$name.as_deref() {
					return Some(Cow::Borrowed(item));
				}

				None
			}
		)+
	}
}

/// The revision of an ID3v1 tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Id3v1Revision {
	/// ID3v1.0, or an ID3v1.1 tag without a track number
	///
	/// The two can't be told apart when the track number byte is zero.
	V1,
	/// ID3v1.1, with a track number
	V1_1,
}

/// An ID3v1 tag
///
/// ID3v1 is a severely limited format, with each field
/// being incredibly small in size. All fields have been
/// commented with their maximum sizes and any other additional
/// restrictions.
///
/// Empty fields are `None`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// The tag revision
	pub revision: Id3v1Revision,
	/// Track title, 30 bytes max
	pub title: Option<String>,
	/// Track artist, 30 bytes max
	pub artist: Option<String>,
	/// Album title, 30 bytes max
	pub album: Option<String>,
	/// Release year, 4 digits
	pub year: Option<u16>,
	/// A short comment
	///
	/// The number of bytes differs between versions, but not much.
	/// A V1 tag may have been read, which limits this field to 30 bytes.
	/// A V1.1 tag, however, only has 28 bytes available.
	pub comment: Option<String>,
	/// The track number, 1 byte max
	///
	/// This is only present in ID3v1.1
	pub track_number: Option<u8>,
	/// The track's genre, 1 byte max
	///
	/// ID3v1 has a predefined set of genres, see [`GENRES`].
	/// This byte should be an index to a genre.
	pub genre: Option<u8>,
}

impl Default for Id3v1Tag {
	fn default() -> Self {
		Self {
			revision: Id3v1Revision::V1,
			title: None,
			artist: None,
			album: None,
			year: None,
			comment: None,
			track_number: None,
			genre: None,
		}
	}
}

impl Id3v1Tag {
	impl_accessor!(title, artist, album, comment,);

	/// Get the genre as a string
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::id3::v1::Id3v1Tag;
	///
	/// let mut tag = Id3v1Tag::default();
	/// tag.genre = Some(17);
	///
	/// assert_eq!(tag.genre_name(), Some("Rock"));
	/// ```
	pub fn genre_name(&self) -> Option<&'static str> {
		self.genre
			.and_then(|genre| GENRES.get(usize::from(genre)))
			.copied()
	}

	/// Whether the tag has no fields set
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.artist.is_none()
			&& self.album.is_none()
			&& self.year.is_none()
			&& self.comment.is_none()
			&& self.track_number.is_none()
			&& self.genre.is_none()
	}
}
