use crate::util::{AUDIO, tag, temp_file, v2_frame, v3_frame, v4_frame};

use cuetag::config::ParseOptions;
use cuetag::error::{ErrorKind, Id3v2ErrorKind};
use cuetag::id3::v2::{CanonicalFrameType, Frame, Id3v2Version, read_id3v2};
use cuetag::id3::{Id3Tag, read_from};
use cuetag::picture::{MimeType, PictureType};
use cuetag::TextEncoding;

use std::io::Write;

#[test_log::test]
fn read_title() {
	let bytes = tag(3, 0, &v3_frame("TIT2", 0, b"\x00Title"));

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tag.version(), Id3v2Version::V3);
	assert_eq!(tag.len(), 1);

	let Frame::Text(title) = &tag.frames()[0] else {
		panic!("Expected a text frame");
	};
	assert_eq!(title.header().id().as_str(), "TIT2");
	assert_eq!(title.header().frame_type(), CanonicalFrameType::Title);
	assert_eq!(title.header().size(), 16);
	assert_eq!(title.encoding, TextEncoding::Latin1);
	assert_eq!(title.value, "Title");
}

#[test_log::test]
fn not_a_tag() {
	assert!(
		read_id3v2(&mut &b"RIFF\x00\x00\x00\x00WAVE"[..], ParseOptions::new())
			.unwrap()
			.is_none()
	);

	// Unsupported major version
	let bytes = tag(5, 0, &v4_frame("TIT2", 0, b"\x00Title"));
	assert!(
		read_id3v2(&mut &bytes[..], ParseOptions::new())
			.unwrap()
			.is_none()
	);
}

#[test_log::test]
fn unknown_frame_is_skipped() {
	let mut body = v3_frame("XXXX", 0, b"\x00\x01\x02");
	body.extend(v3_frame("TPE1", 0, b"\x00Artist"));

	let bytes = tag(3, 0, &body);
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tag.len(), 1);
	assert_eq!(tag.artist().as_deref(), Some("Artist"));

	let tag = read_id3v2(
		&mut &bytes[..],
		ParseOptions::new().keep_unknown_frames(true),
	)
	.unwrap()
	.unwrap();

	assert_eq!(tag.len(), 2);
	let Frame::Raw(raw) = &tag.frames()[0] else {
		panic!("Expected a raw frame");
	};
	assert_eq!(raw.header().frame_type(), CanonicalFrameType::Unrecognised);
	assert_eq!(raw.data, &[0x00, 0x01, 0x02]);
}

#[test_log::test]
fn comments() {
	let mut body = v3_frame("COMM", 0, b"\x00engiTunNORM\x00 0000");
	body.extend(v3_frame("COMM", 0, b"\x00eng\x00Main comment"));

	let bytes = tag(3, 0, &body);
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tag.get_all(CanonicalFrameType::Comment).count(), 2);

	let comment = tag.comment().unwrap();
	assert_eq!(comment.language_str(), Some("eng"));
	assert_eq!(comment.description, "");
	assert_eq!(comment.content, "Main comment");
}

#[test_log::test]
fn truncated_tag() {
	let mut bytes = tag(3, 0, &v3_frame("TIT2", 0, b"\x00Title"));
	bytes.truncate(bytes.len() - 3);

	let err = read_id3v2(&mut &bytes[..], ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedInput));
}

#[test_log::test]
fn frame_larger_than_tag() {
	let mut frame = v3_frame("TIT2", 0, b"\x00Title");
	// Claim 255 bytes
	frame[7] = 0xFF;

	let bytes = tag(3, 0, &frame);
	let err = read_id3v2(&mut &bytes[..], ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedInput));
}

#[test_log::test]
fn malformed_tag_size() {
	let mut bytes = tag(4, 0, &v4_frame("TIT2", 0, b"\x00Title"));
	bytes[9] |= 0x80;

	let err = read_id3v2(&mut &bytes[..], ParseOptions::new()).unwrap_err();
	assert_eq!(err.id3v2_kind(), Some(&Id3v2ErrorKind::MalformedSize));
}

#[test_log::test]
fn unsupported_text_encoding() {
	let bytes = tag(4, 0, &v4_frame("TIT2", 0, b"\x07Title"));

	let err = read_id3v2(&mut &bytes[..], ParseOptions::new()).unwrap_err();
	assert_eq!(
		err.id3v2_kind(),
		Some(&Id3v2ErrorKind::UnsupportedEncoding(7))
	);
}

#[test_log::test]
fn whole_tag_unsynchronisation() {
	// "\xFF\x00" is stored for every 0xFF in the tag
	let bytes = tag(
		3,
		0x80,
		&v3_frame("TIT2", 0, b"\x01\xFF\x00\xFEF\x00o\x00o\x00"),
	);
	// The stored frame size is that of the resynchronised body
	let mut bytes = bytes;
	bytes[10 + 7] = 9;

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert!(tag.flags().unsynchronisation);
	assert_eq!(tag.title().as_deref(), Some("Foo"));
}

#[test_log::test]
fn v4_whole_tag_unsynchronisation() {
	// Frame size 3 counts the resynchronised body, "\x00\xFF\xFE"
	let mut body = v4_frame("TIT2", 0, b"\x00\xFF\x00\xFE");
	body[7] = 3;
	let bytes = tag(4, 0x80, &body);

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert!(tag.flags().unsynchronisation);
	assert_eq!(tag.title().as_deref(), Some("\u{FF}\u{FE}"));
}

#[test_log::test]
fn huge_declared_tag_size() {
	let bytes = b"ID3\x03\x00\x00\x7F\x7F\x7F\x7FTIT2";

	let err = read_id3v2(&mut &bytes[..], ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedInput));
}

#[test_log::test]
fn v4_frame_unsynchronisation() {
	let body = v4_frame("TIT2", 0x0002, b"\x01\xFF\x00\xFEF\x00o\x00o\x00");
	let bytes = tag(4, 0, &body);

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	let title = tag.get(CanonicalFrameType::Title).unwrap();
	assert!(title.flags().unsynchronisation);
	assert_eq!(tag.title().as_deref(), Some("Foo"));
}

#[test_log::test]
fn v2_2_frames() {
	let mut body = v2_frame("TT2", b"\x00Title");
	body.extend(v2_frame("TP1", b"\x00Artist"));
	body.extend(v2_frame("PIC", b"\x00PNG\x03Cover\x00\x89PNG"));
	body.extend(v2_frame("ULT", b"\x00engLyrics\x00La la la"));

	let bytes = tag(2, 0, &body);
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tag.version(), Id3v2Version::V2);
	assert_eq!(tag.title().as_deref(), Some("Title"));
	assert_eq!(tag.artist().as_deref(), Some("Artist"));

	let picture = tag.pictures().next().unwrap();
	assert_eq!(picture.header().id().as_str(), "PIC");
	assert_eq!(picture.mime_type, Some(MimeType::Png));
	assert_eq!(picture.picture_type, PictureType::CoverFront);
	assert_eq!(picture.description, "Cover");
	assert_eq!(picture.data, b"\x89PNG");

	let Some(Frame::Comment(lyrics)) = tag.get(CanonicalFrameType::UnsynchronisedLyrics) else {
		panic!("Expected lyrics");
	};
	assert_eq!(lyrics.content, "La la la");
}

#[test_log::test]
fn v2_2_other_picture_format() {
	let mut body = v2_frame("TT2", b"\x00Title");
	body.extend(v2_frame("PIC", b"\x00GIF\x03\x00GIF89a"));

	let bytes = tag(2, 0, &body);
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tag.title().as_deref(), Some("Title"));
	let picture = tag.pictures().next().unwrap();
	assert_eq!(
		picture.mime_type,
		Some(MimeType::Unknown(String::from("GIF")))
	);
	assert_eq!(picture.data, b"GIF89a");
}

#[test_log::test]
fn same_type_across_versions() {
	let v2 = tag(2, 0, &v2_frame("TYE", b"\x001999"));
	let v3 = tag(3, 0, &v3_frame("TYER", 0, b"\x001999"));

	let v2 = read_id3v2(&mut &v2[..], ParseOptions::new())
		.unwrap()
		.unwrap();
	let v3 = read_id3v2(&mut &v3[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(v2.frames()[0].frame_type(), v3.frames()[0].frame_type());
	assert_eq!(v2.year(), Some(1999));
	assert_eq!(v3.year(), Some(1999));
}

#[test_log::test]
fn attached_picture() {
	let bytes = tag(
		4,
		0,
		&v4_frame("APIC", 0, b"\x03image/jpeg\x00\x04Back\x00\xFF\xD8\xFF"),
	);

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();
	let picture = tag.pictures().next().unwrap();
	assert_eq!(picture.mime_type, Some(MimeType::Jpeg));
	assert_eq!(picture.picture_type, PictureType::CoverBack);
	assert_eq!(picture.description, "Back");
	assert_eq!(picture.data, &[0xFF, 0xD8, 0xFF]);

	let tag = read_id3v2(
		&mut &bytes[..],
		ParseOptions::new().read_cover_art(false),
	)
	.unwrap()
	.unwrap();
	assert!(tag.is_empty());
}

#[test_log::test]
fn user_defined_frames() {
	let mut body = v4_frame("TXXX", 0, b"\x00REPLAYGAIN_TRACK_GAIN\x00-6.5 dB");
	body.extend(v4_frame("WXXX", 0, b"\x00Homepage\x00https://example.com"));
	body.extend(v4_frame("WOAR", 0, b"https://example.com/artist"));

	let bytes = tag(4, 0, &body);
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	let Some(Frame::UserText(gain)) = tag.get(CanonicalFrameType::UserDefinedText) else {
		panic!("Expected a TXXX frame");
	};
	assert_eq!(gain.description, "REPLAYGAIN_TRACK_GAIN");
	assert_eq!(gain.content, "-6.5 dB");

	let Some(Frame::UserUrl(homepage)) = tag.get(CanonicalFrameType::UserDefinedUrl) else {
		panic!("Expected a WXXX frame");
	};
	assert_eq!(homepage.description, "Homepage");
	assert_eq!(homepage.url, "https://example.com");

	let Some(Frame::Url(artist)) = tag.get(CanonicalFrameType::ArtistUrl) else {
		panic!("Expected a WOAR frame");
	};
	assert_eq!(artist.url, "https://example.com/artist");
}

#[test_log::test]
fn unique_file_identifier() {
	let bytes = tag(
		3,
		0,
		&v3_frame("UFID", 0, b"http://musicbrainz.org\x00abc-123"),
	);

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();
	let Some(Frame::UniqueFileIdentifier(ufid)) = tag.get(CanonicalFrameType::UniqueFileIdentifier)
	else {
		panic!("Expected a UFID frame");
	};
	assert_eq!(ufid.owner, "http://musicbrainz.org");
	assert_eq!(ufid.identifier, b"abc-123");
}

#[test_log::test]
fn involved_people() {
	let bytes = tag(
		3,
		0,
		&v3_frame("IPLS", 0, b"\x00producer\x00Alice\x00mixer\x00Bob\x00"),
	);

	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();
	let Some(Frame::InvolvedPeopleList(people)) = tag.get(CanonicalFrameType::InvolvedPeopleList) else {
		panic!("Expected an IPLS frame");
	};
	assert_eq!(
		people.people,
		vec![
			(String::from("producer"), String::from("Alice")),
			(String::from("mixer"), String::from("Bob")),
		]
	);
}

#[test_log::test]
#[cfg(feature = "id3v2_compression_support")]
fn compressed_frame() {
	let content = b"\x00A rather long title, compressed";

	let mut encoder =
		flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(content).unwrap();
	let compressed = encoder.finish().unwrap();

	let mut body = (content.len() as u32).to_be_bytes().to_vec();
	body.extend(compressed);

	let bytes = tag(3, 0, &v3_frame("TIT2", 0x0080, &body));
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	let title = tag.get(CanonicalFrameType::Title).unwrap();
	assert!(title.flags().compression);
	assert_eq!(
		title.flags().data_length_indicator,
		Some(content.len() as u32)
	);
	assert_eq!(tag.title().as_deref(), Some("A rather long title, compressed"));
}

#[test_log::test]
fn padding_after_frames() {
	let mut body = v4_frame("TALB", 0, b"\x03Album");
	body.extend([0; 64]);

	let bytes = tag(4, 0, &body);
	let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tag.len(), 1);
	assert_eq!(tag.album().as_deref(), Some("Album"));
}

#[test_log::test]
fn read_from_file() {
	let mut bytes = tag(4, 0, &v4_frame("TIT2", 0, b"\x03Title"));
	bytes.extend_from_slice(AUDIO);

	let mut file = temp_file(&bytes);
	let Some(Id3Tag::Id3v2(tag)) = read_from(&mut file, ParseOptions::new()).unwrap() else {
		panic!("Expected an ID3v2 tag");
	};

	assert_eq!(tag.version(), Id3v2Version::V4);
	assert_eq!(tag.title().as_deref(), Some("Title"));
}

#[test_log::test]
fn read_from_path() {
	let bytes = tag(3, 0, &v3_frame("TIT2", 0, b"\x00Title"));

	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&bytes).unwrap();
	file.write_all(AUDIO).unwrap();

	let tag = cuetag::id3::read_from_path(file.path(), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tag.version(), cuetag::id3::Id3Version::V2_3);
}
