use super::position::Position;

use std::fmt::{Display, Formatter};

/// The type of an audio file referenced by a `FILE` command
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FileType {
	/// Intel binary file (little endian)
	Binary,
	/// Motorola binary file (big endian)
	Motorola,
	/// AIFF audio
	Aiff,
	/// WAVE audio
	Wave,
	/// MPEG audio
	Mp3,
	/// Anything else, such as `FLAC` written by some rippers
	Other(String),
}

impl FileType {
	pub(crate) fn from_keyword(keyword: &str) -> Self {
		match &*keyword.to_ascii_uppercase() {
			"BINARY" => Self::Binary,
			"MOTOROLA" => Self::Motorola,
			"AIFF" => Self::Aiff,
			"WAVE" => Self::Wave,
			"MP3" => Self::Mp3,
			_ => Self::Other(keyword.to_owned()),
		}
	}

	/// The keyword used in the cue sheet
	pub fn as_str(&self) -> &str {
		match self {
			Self::Binary => "BINARY",
			Self::Motorola => "MOTOROLA",
			Self::Aiff => "AIFF",
			Self::Wave => "WAVE",
			Self::Mp3 => "MP3",
			Self::Other(other) => other,
		}
	}
}

impl Display for FileType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The data type of a track
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TrackDataType {
	/// Audio (sector size 2352)
	Audio,
	/// Karaoke CD+G (sector size 2448)
	Cdg,
	/// CD-ROM mode 1 data, cooked (sector size 2048)
	Mode1_2048,
	/// CD-ROM mode 1 data, raw (sector size 2352)
	Mode1_2352,
	/// CD-ROM XA mode 2 data (sector size 2336)
	Mode2_2336,
	/// CD-ROM XA mode 2 data (sector size 2352)
	Mode2_2352,
	/// CD-I mode 2 data (sector size 2336)
	Cdi2336,
	/// CD-I mode 2 data (sector size 2352)
	Cdi2352,
	/// An unknown data type
	Other(String),
}

impl TrackDataType {
	pub(crate) fn from_keyword(keyword: &str) -> Self {
		match &*keyword.to_ascii_uppercase() {
			"AUDIO" => Self::Audio,
			"CDG" => Self::Cdg,
			"MODE1/2048" => Self::Mode1_2048,
			"MODE1/2352" => Self::Mode1_2352,
			"MODE2/2336" => Self::Mode2_2336,
			"MODE2/2352" => Self::Mode2_2352,
			"CDI/2336" => Self::Cdi2336,
			"CDI/2352" => Self::Cdi2352,
			_ => Self::Other(keyword.to_owned()),
		}
	}

	/// The keyword used in the cue sheet
	pub fn as_str(&self) -> &str {
		match self {
			Self::Audio => "AUDIO",
			Self::Cdg => "CDG",
			Self::Mode1_2048 => "MODE1/2048",
			Self::Mode1_2352 => "MODE1/2352",
			Self::Mode2_2336 => "MODE2/2336",
			Self::Mode2_2352 => "MODE2/2352",
			Self::Cdi2336 => "CDI/2336",
			Self::Cdi2352 => "CDI/2352",
			Self::Other(other) => other,
		}
	}
}

/// Sub-code flags of a track, from the `FLAGS` command
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct TrackFlags {
	/// `DCP`: Digital copy permitted
	pub digital_copy_permitted: bool,
	/// `4CH`: Four channel audio
	pub four_channel: bool,
	/// `PRE`: Pre-emphasis enabled
	pub pre_emphasis: bool,
	/// `SCMS`: Serial copy management system
	pub serial_copy_management: bool,
}

/// An `INDEX` within a track
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Index {
	/// The index number, `0..=99`
	///
	/// Index 0 is the start of the pregap, index 1 the start of the track itself.
	pub number: u8,
	/// The position within the file
	pub position: Position,
}

/// A `TRACK` and the commands that apply to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackData {
	/// The track number, `1..=99`
	pub number: u8,
	/// The track data type
	pub data_type: TrackDataType,
	/// The track title
	pub title: Option<String>,
	/// The track performer
	pub performer: Option<String>,
	/// The track songwriter
	pub songwriter: Option<String>,
	/// International Standard Recording Code, 12 characters
	pub isrc: Option<String>,
	/// Sub-code flags
	pub flags: TrackFlags,
	/// Silence added before the track, not present in the file
	pub pregap: Option<Position>,
	/// Silence added after the track, not present in the file
	pub postgap: Option<Position>,
	/// Every index, in order
	pub indices: Vec<Index>,
	/// `REM` lines found within the track
	pub comments: Vec<String>,
}

impl TrackData {
	pub(crate) fn new(number: u8, data_type: TrackDataType) -> Self {
		Self {
			number,
			data_type,
			title: None,
			performer: None,
			songwriter: None,
			isrc: None,
			flags: TrackFlags::default(),
			pregap: None,
			postgap: None,
			indices: Vec::new(),
			comments: Vec::new(),
		}
	}

	/// Get an index by its number
	pub fn index(&self, number: u8) -> Option<&Index> {
		self.indices.iter().find(|index| index.number == number)
	}
}

/// A `FILE` and the tracks stored within it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileData {
	/// The file name, relative to the cue sheet
	pub file: String,
	/// The file type
	pub file_type: FileType,
	/// The tracks stored in the file
	pub tracks: Vec<TrackData>,
}

/// A parsed cue sheet
///
/// See [`CueSheet::parse`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CueSheet {
	/// The Media Catalog Number, 13 digits
	pub catalog: Option<String>,
	/// A CD-TEXT file
	pub cdtext_file: Option<String>,
	/// The album performer
	pub performer: Option<String>,
	/// The album title
	pub title: Option<String>,
	/// The album songwriter
	pub songwriter: Option<String>,
	/// `REM` lines found before the first track
	pub comments: Vec<String>,
	/// Every file, in order
	pub files: Vec<FileData>,
}

impl CueSheet {
	/// Iterate over every track of every file, in order
	pub fn tracks(&self) -> impl Iterator<Item = TrackRef<'_>> {
		self.files.iter().flat_map(move |file| {
			file.tracks.iter().map(move |track| TrackRef {
				sheet: self,
				file,
				track,
			})
		})
	}

	/// Find a track by its number
	pub fn track_by_number(&self, number: u8) -> Option<TrackRef<'_>> {
		self.tracks().find(|track| track.track.number == number)
	}

	/// The total number of tracks
	pub fn track_count(&self) -> usize {
		self.files.iter().map(|file| file.tracks.len()).sum()
	}
}

/// A track, along with the file and sheet that hold it
#[derive(Copy, Clone, Debug)]
pub struct TrackRef<'a> {
	/// The sheet holding the track
	pub sheet: &'a CueSheet,
	/// The file holding the track
	pub file: &'a FileData,
	/// The track itself
	pub track: &'a TrackData,
}

impl<'a> TrackRef<'a> {
	/// The track title, falling back to the sheet title
	pub fn title(&self) -> Option<&'a str> {
		self.track
			.title
			.as_deref()
			.or(self.sheet.title.as_deref())
	}

	/// The track performer, falling back to the sheet performer
	pub fn performer(&self) -> Option<&'a str> {
		self.track
			.performer
			.as_deref()
			.or(self.sheet.performer.as_deref())
	}

	/// The track songwriter, falling back to the sheet songwriter
	pub fn songwriter(&self) -> Option<&'a str> {
		self.track
			.songwriter
			.as_deref()
			.or(self.sheet.songwriter.as_deref())
	}

	/// The name of the file holding the track
	pub fn file_name(&self) -> &'a str {
		&self.file.file
	}

	/// The start of the track (index 1)
	pub fn start(&self) -> Option<Position> {
		self.track.index(1).map(|index| index.position)
	}

	/// The start of the pregap stored in the file (index 0)
	pub fn pregap_start(&self) -> Option<Position> {
		self.track.index(0).map(|index| index.position)
	}

	/// The end of the track within its file
	///
	/// This is the start of the next track's pregap (or the next track itself) in the same file.
	/// `None` for the last track of a file, which runs until the end of the file.
	pub fn end(&self) -> Option<Position> {
		let position = self
			.file
			.tracks
			.iter()
			.position(|track| std::ptr::eq(track, self.track))?;

		let next = self.file.tracks.get(position + 1)?;
		next.index(0).or_else(|| next.index(1)).map(|index| index.position)
	}
}
