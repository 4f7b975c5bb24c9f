//! Mapping between on-disk frame identifiers and [`CanonicalFrameType`]s
//!
//! Every ID3v2 major version has its own identifier table. A canonical type may be spelled
//! differently in each version (ex. `TT2` and `TIT2` are both [`CanonicalFrameType::Title`]),
//! and an identifier means nothing outside of its version.

use crate::id3::v2::Id3v2Version;

use std::collections::HashMap;
use std::sync::OnceLock;

/// The grammar used to decode a frame body
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BodyGrammar {
	Text,
	Url,
	/// Encoding, language, description, text (`COMM`, `USLT`)
	Comment,
	Picture,
	UniqueFileIdentifier,
	MusicCdIdentifier,
	/// Encoding followed by (role, person) pairs (`IPLS`, `TIPL`, `TMCL`)
	InvolvedPeople,
	UserText,
	UserUrl,
	PodcastMarker,
	/// No dedicated decoder, the body is kept as-is
	Raw,
}

struct DictionaryEntry {
	ids: [Option<&'static str>; 3],
	grammar: BodyGrammar,
}

macro_rules! opt_id {
	(-) => {
		None
	};
	($id:literal) => {
		Some($id)
	};
}

macro_rules! frame_dictionary {
	(
		$($variant:ident => ($v2:tt, $v3:tt, $v4:tt), $grammar:ident, $doc:literal;)+
	) => {
		/// A version-independent frame type
		///
		/// See [`identifier_for`] and [`canonical_type_for`] to convert to and from the on-disk identifiers.
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
		#[non_exhaustive]
		pub enum CanonicalFrameType {
			$(
				#[doc = $doc]
				$variant,
			)+
			/// A frame with an identifier unknown to every version
			Unrecognised,
		}

		// Indexed by the `CanonicalFrameType` discriminant
		const DICTIONARY: &[DictionaryEntry] = &[
			$(
				DictionaryEntry {
					ids: [opt_id!($v2), opt_id!($v3), opt_id!($v4)],
					grammar: BodyGrammar::$grammar,
				},
			)+
		];

		const ALL_TYPES: &[CanonicalFrameType] = &[$(CanonicalFrameType::$variant,)+];
	};
}

frame_dictionary! {
	// Text information
	ContentGroup             => ("TT1", "TIT1", "TIT1"), Text, "Content group description";
	Title                    => ("TT2", "TIT2", "TIT2"), Text, "Title/songname/content description";
	Subtitle                 => ("TT3", "TIT3", "TIT3"), Text, "Subtitle/description refinement";
	Album                    => ("TAL", "TALB", "TALB"), Text, "Album/movie/show title";
	OriginalAlbum            => ("TOT", "TOAL", "TOAL"), Text, "Original album/movie/show title";
	TrackNumber              => ("TRK", "TRCK", "TRCK"), Text, "Track number/position in set";
	PartOfSet                => ("TPA", "TPOS", "TPOS"), Text, "Part of a set";
	SetSubtitle              => (-, -, "TSST"), Text, "Set subtitle";
	Isrc                     => ("TRC", "TSRC", "TSRC"), Text, "International Standard Recording Code";
	Performer                => ("TP1", "TPE1", "TPE1"), Text, "Lead performer(s)/soloist(s)";
	Band                     => ("TP2", "TPE2", "TPE2"), Text, "Band/orchestra/accompaniment";
	Conductor                => ("TP3", "TPE3", "TPE3"), Text, "Conductor/performer refinement";
	Remixer                  => ("TP4", "TPE4", "TPE4"), Text, "Interpreted, remixed, or otherwise modified by";
	OriginalArtist           => ("TOA", "TOPE", "TOPE"), Text, "Original artist(s)/performer(s)";
	Lyricist                 => ("TXT", "TEXT", "TEXT"), Text, "Lyricist/text writer";
	OriginalLyricist         => ("TOL", "TOLY", "TOLY"), Text, "Original lyricist(s)/text writer(s)";
	Composer                 => ("TCM", "TCOM", "TCOM"), Text, "Composer";
	EncodedBy                => ("TEN", "TENC", "TENC"), Text, "Encoded by";
	Bpm                      => ("TBP", "TBPM", "TBPM"), Text, "Beats per minute";
	Length                   => ("TLE", "TLEN", "TLEN"), Text, "Length in milliseconds";
	InitialKey               => ("TKE", "TKEY", "TKEY"), Text, "Initial key";
	Language                 => ("TLA", "TLAN", "TLAN"), Text, "Language(s)";
	ContentType              => ("TCO", "TCON", "TCON"), Text, "Content type (genre)";
	FileType                 => ("TFT", "TFLT", "TFLT"), Text, "File type";
	MediaType                => ("TMT", "TMED", "TMED"), Text, "Media type";
	Mood                     => (-, -, "TMOO"), Text, "Mood";
	Copyright                => ("TCR", "TCOP", "TCOP"), Text, "Copyright message";
	ProducedNotice           => (-, -, "TPRO"), Text, "Produced notice";
	Publisher                => ("TPB", "TPUB", "TPUB"), Text, "Publisher";
	FileOwner                => (-, "TOWN", "TOWN"), Text, "File owner/licensee";
	RadioStationName         => (-, "TRSN", "TRSN"), Text, "Internet radio station name";
	RadioStationOwner        => (-, "TRSO", "TRSO"), Text, "Internet radio station owner";
	OriginalFilename         => ("TOF", "TOFN", "TOFN"), Text, "Original filename";
	PlaylistDelay            => ("TDY", "TDLY", "TDLY"), Text, "Playlist delay";
	EncodingTime             => (-, -, "TDEN"), Text, "Encoding time";
	OriginalReleaseTime      => (-, -, "TDOR"), Text, "Original release time";
	RecordingTime            => (-, -, "TDRC"), Text, "Recording time";
	ReleaseTime              => (-, -, "TDRL"), Text, "Release time";
	TaggingTime              => (-, -, "TDTG"), Text, "Tagging time";
	EncodingSettings         => ("TSS", "TSSE", "TSSE"), Text, "Software/hardware and settings used for encoding";
	AlbumSortOrder           => ("TSA", "TSOA", "TSOA"), Text, "Album sort order";
	PerformerSortOrder       => ("TSP", "TSOP", "TSOP"), Text, "Performer sort order";
	TitleSortOrder           => ("TST", "TSOT", "TSOT"), Text, "Title sort order";
	AlbumArtistSortOrder     => ("TS2", "TSO2", "TSO2"), Text, "Album artist sort order (iTunes)";
	ComposerSortOrder        => ("TSC", "TSOC", "TSOC"), Text, "Composer sort order (iTunes)";
	Compilation              => ("TCP", "TCMP", "TCMP"), Text, "Part of a compilation (iTunes)";
	Grouping                 => (-, "GRP1", "GRP1"), Text, "Grouping (iTunes)";
	MovementName             => (-, "MVNM", "MVNM"), Text, "Movement name (iTunes)";
	MovementNumber           => (-, "MVIN", "MVIN"), Text, "Movement number/count (iTunes)";
	PodcastCategory          => (-, "TCAT", "TCAT"), Text, "Podcast category (iTunes)";
	PodcastDescription       => (-, "TDES", "TDES"), Text, "Podcast description (iTunes)";
	PodcastId                => (-, "TGID", "TGID"), Text, "Podcast identifier (iTunes)";
	PodcastKeywords          => (-, "TKWD", "TKWD"), Text, "Podcast keywords (iTunes)";
	Year                     => ("TYE", "TYER", -), Text, "Year";
	Date                     => ("TDA", "TDAT", -), Text, "Date (DDMM)";
	Time                     => ("TIM", "TIME", -), Text, "Time (HHMM)";
	RecordingDates           => ("TRD", "TRDA", -), Text, "Recording dates";
	OriginalReleaseYear      => ("TOR", "TORY", -), Text, "Original release year";
	Size                     => ("TSI", "TSIZ", -), Text, "Size of the audio file in bytes, excluding the tag";
	UserDefinedText          => ("TXX", "TXXX", "TXXX"), UserText, "User defined text information";

	// Involved people
	InvolvedPeopleList       => ("IPL", "IPLS", "TIPL"), InvolvedPeople, "Involved people list";
	MusicianCreditsList      => (-, -, "TMCL"), InvolvedPeople, "Musician credits list";

	// URLs
	CommercialUrl            => ("WCM", "WCOM", "WCOM"), Url, "Commercial information";
	CopyrightUrl             => ("WCP", "WCOP", "WCOP"), Url, "Copyright/legal information";
	AudioFileUrl             => ("WAF", "WOAF", "WOAF"), Url, "Official audio file webpage";
	ArtistUrl                => ("WAR", "WOAR", "WOAR"), Url, "Official artist/performer webpage";
	AudioSourceUrl           => ("WAS", "WOAS", "WOAS"), Url, "Official audio source webpage";
	RadioStationUrl          => (-, "WORS", "WORS"), Url, "Official internet radio station homepage";
	PaymentUrl               => (-, "WPAY", "WPAY"), Url, "Payment";
	PublisherUrl             => ("WPB", "WPUB", "WPUB"), Url, "Publisher's official webpage";
	PodcastFeedUrl           => (-, "WFED", "WFED"), Url, "Podcast feed (iTunes)";
	UserDefinedUrl           => ("WXX", "WXXX", "WXXX"), UserUrl, "User defined URL link";

	// Structured
	Comment                  => ("COM", "COMM", "COMM"), Comment, "Comments";
	UnsynchronisedLyrics     => ("ULT", "USLT", "USLT"), Comment, "Unsynchronised lyric/text transcription";
	Picture                  => ("PIC", "APIC", "APIC"), Picture, "Attached picture";
	UniqueFileIdentifier     => ("UFI", "UFID", "UFID"), UniqueFileIdentifier, "Unique file identifier";
	MusicCdIdentifier        => ("MCI", "MCDI", "MCDI"), MusicCdIdentifier, "Music CD identifier";
	PodcastMarker            => (-, "PCST", "PCST"), PodcastMarker, "Podcast marker (iTunes)";

	// Kept raw
	AudioEncryption          => ("CRA", "AENC", "AENC"), Raw, "Audio encryption";
	AudioSeekPointIndex      => (-, -, "ASPI"), Raw, "Audio seek point index";
	Commercial               => (-, "COMR", "COMR"), Raw, "Commercial frame";
	EncryptedMeta            => ("CRM", -, -), Raw, "Encrypted meta frame";
	EncryptionMethod         => (-, "ENCR", "ENCR"), Raw, "Encryption method registration";
	Equalisation             => ("EQU", "EQUA", -), Raw, "Equalisation";
	Equalisation2            => (-, -, "EQU2"), Raw, "Equalisation (2)";
	EventTimingCodes         => ("ETC", "ETCO", "ETCO"), Raw, "Event timing codes";
	GeneralObject            => ("GEO", "GEOB", "GEOB"), Raw, "General encapsulated object";
	GroupIdRegistration      => (-, "GRID", "GRID"), Raw, "Group identification registration";
	LinkedInformation        => ("LNK", "LINK", "LINK"), Raw, "Linked information";
	MpegLocationLookupTable  => ("MLL", "MLLT", "MLLT"), Raw, "MPEG location lookup table";
	Ownership                => (-, "OWNE", "OWNE"), Raw, "Ownership frame";
	PlayCounter              => ("CNT", "PCNT", "PCNT"), Raw, "Play counter";
	Popularimeter            => ("POP", "POPM", "POPM"), Raw, "Popularimeter";
	PositionSync             => (-, "POSS", "POSS"), Raw, "Position synchronisation frame";
	Private                  => (-, "PRIV", "PRIV"), Raw, "Private frame";
	RecommendedBufferSize    => ("BUF", "RBUF", "RBUF"), Raw, "Recommended buffer size";
	RelativeVolumeAdjustment => ("RVA", "RVAD", -), Raw, "Relative volume adjustment";
	RelativeVolumeAdjustment2 => (-, -, "RVA2"), Raw, "Relative volume adjustment (2)";
	Reverb                   => ("REV", "RVRB", "RVRB"), Raw, "Reverb";
	Seek                     => (-, -, "SEEK"), Raw, "Seek frame";
	Signature                => (-, -, "SIGN"), Raw, "Signature frame";
	SynchronisedLyrics       => ("SLT", "SYLT", "SYLT"), Raw, "Synchronised lyric/text";
	SynchronisedTempoCodes   => ("STC", "SYTC", "SYTC"), Raw, "Synchronised tempo codes";
	TermsOfUse               => (-, "USER", "USER"), Raw, "Terms of use";
}

impl CanonicalFrameType {
	fn entry(self) -> Option<&'static DictionaryEntry> {
		DICTIONARY.get(self as usize)
	}

	pub(crate) fn grammar(self) -> BodyGrammar {
		self.entry().map_or(BodyGrammar::Raw, |entry| entry.grammar)
	}

	/// Whether a frame of this type must be discarded when the audio is altered
	///
	/// This overrides whatever the frame's flags declare.
	pub fn discard_on_file_alter(self) -> bool {
		matches!(
			self,
			Self::AudioEncryption
				| Self::AudioSeekPointIndex
				| Self::EncodedBy
				| Self::Equalisation
				| Self::Equalisation2
				| Self::EventTimingCodes
				| Self::Length
				| Self::MpegLocationLookupTable
				| Self::PositionSync
				| Self::RelativeVolumeAdjustment
				| Self::RelativeVolumeAdjustment2
				| Self::Seek
				| Self::Size
				| Self::SynchronisedLyrics
				| Self::SynchronisedTempoCodes
		)
	}
}

/// Get the identifier of a [`CanonicalFrameType`] in a specific version
///
/// Returns `None` if the type doesn't exist in `version`.
///
/// # Examples
///
/// ```rust
/// use cuetag::id3::v2::{CanonicalFrameType, Id3v2Version, identifier_for};
///
/// assert_eq!(identifier_for(CanonicalFrameType::Title, Id3v2Version::V2), Some("TT2"));
/// assert_eq!(identifier_for(CanonicalFrameType::Title, Id3v2Version::V4), Some("TIT2"));
/// assert_eq!(identifier_for(CanonicalFrameType::Year, Id3v2Version::V4), None);
/// ```
pub fn identifier_for(frame_type: CanonicalFrameType, version: Id3v2Version) -> Option<&'static str> {
	frame_type
		.entry()
		.and_then(|entry| entry.ids[version_index(version)])
}

/// Get the [`CanonicalFrameType`] of an identifier in a specific version
///
/// Returns `None` for unknown identifiers.
///
/// # Examples
///
/// ```rust
/// use cuetag::id3::v2::{CanonicalFrameType, Id3v2Version, canonical_type_for};
///
/// assert_eq!(
/// 	canonical_type_for("TP1", Id3v2Version::V2),
/// 	Some(CanonicalFrameType::Performer)
/// );
///
/// // ID3v2.2 identifiers mean nothing in ID3v2.4
/// assert_eq!(canonical_type_for("TP1", Id3v2Version::V4), None);
/// ```
pub fn canonical_type_for(id: &str, version: Id3v2Version) -> Option<CanonicalFrameType> {
	table(version).get(id).copied()
}

fn version_index(version: Id3v2Version) -> usize {
	match version {
		Id3v2Version::V2 => 0,
		Id3v2Version::V3 => 1,
		Id3v2Version::V4 => 2,
	}
}

fn table(version: Id3v2Version) -> &'static HashMap<&'static str, CanonicalFrameType> {
	static V2: OnceLock<HashMap<&'static str, CanonicalFrameType>> = OnceLock::new();
	static V3: OnceLock<HashMap<&'static str, CanonicalFrameType>> = OnceLock::new();
	static V4: OnceLock<HashMap<&'static str, CanonicalFrameType>> = OnceLock::new();

	let instance = match version {
		Id3v2Version::V2 => &V2,
		Id3v2Version::V3 => &V3,
		Id3v2Version::V4 => &V4,
	};

	instance.get_or_init(|| {
		let index = version_index(version);

		let mut map = HashMap::new();
		for frame_type in ALL_TYPES {
			if let Some(id) = frame_type.entry().and_then(|entry| entry.ids[index]) {
				map.insert(id, *frame_type);
			}
		}

		map
	})
}
