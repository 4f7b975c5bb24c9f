use crate::util::{AUDIO, id3v1, temp_file};

use cuetag::config::ParseOptions;
use cuetag::id3::v1::{GENRES, Id3v1Revision, read_id3v1};
use cuetag::id3::{Id3Tag, Id3Version, read_from};

use std::io::Seek;

fn file_with(tag: &[u8]) -> std::fs::File {
	let mut bytes = AUDIO.to_vec();
	bytes.extend_from_slice(tag);
	temp_file(&bytes)
}

#[test_log::test]
fn read_v1_1() {
	let mut file = file_with(&id3v1("Title", "Artist", "1999", Some(7), 17));

	let tag = read_id3v1(&mut file).unwrap().unwrap();
	assert_eq!(tag.revision, Id3v1Revision::V1_1);
	assert_eq!(tag.title.as_deref(), Some("Title"));
	assert_eq!(tag.artist.as_deref(), Some("Artist"));
	assert_eq!(tag.album, None);
	assert_eq!(tag.year, Some(1999));
	assert_eq!(tag.track_number, Some(7));
	assert_eq!(tag.genre_name(), Some("Rock"));

	// The position is left untouched
	assert_eq!(file.stream_position().unwrap(), 0);
}

#[test_log::test]
fn read_v1_0() {
	let mut tag = id3v1("Title", "", "", None, 255);
	tag[97..127].copy_from_slice(b"A comment that fills 30 bytes.");

	let mut file = file_with(&tag);
	let tag = read_id3v1(&mut file).unwrap().unwrap();

	assert_eq!(tag.revision, Id3v1Revision::V1);
	assert_eq!(tag.artist, None);
	assert_eq!(tag.year, None);
	assert_eq!(tag.track_number, None);
	assert_eq!(tag.genre, None);
	assert_eq!(
		tag.comment.as_deref(),
		Some("A comment that fills 30 bytes.")
	);
}

#[test_log::test]
fn space_padded_fields() {
	let mut tag = id3v1("", "", "2004", Some(1), 0);
	tag[3..33].copy_from_slice(b"Padded title                  ");

	let mut file = file_with(&tag);
	let tag = read_id3v1(&mut file).unwrap().unwrap();
	assert_eq!(tag.title.as_deref(), Some("Padded title"));
	assert_eq!(tag.genre_name(), Some(GENRES[0]));
}

#[test_log::test]
fn latin1_text() {
	let mut tag = id3v1("", "", "", None, 0);
	tag[3..8].copy_from_slice(b"Caf\xE9!");

	let mut file = file_with(&tag);
	let tag = read_id3v1(&mut file).unwrap().unwrap();
	assert_eq!(tag.title.as_deref(), Some("Café!"));
}

#[test_log::test]
fn no_tag() {
	let mut file = temp_file(AUDIO);
	assert!(read_id3v1(&mut file).unwrap().is_none());

	// Too small to hold a tag at all
	let mut file = temp_file(b"TAG");
	assert!(read_id3v1(&mut file).unwrap().is_none());
}

#[test_log::test]
fn preferred_when_alone() {
	let mut file = file_with(&id3v1("Title", "Artist", "1999", Some(3), 17));

	let Some(Id3Tag::Id3v1(tag)) = read_from(&mut file, ParseOptions::new()).unwrap() else {
		panic!("Expected an ID3v1 tag");
	};
	assert_eq!(tag.title().as_deref(), Some("Title"));
	assert_eq!(Id3Tag::Id3v1(tag).version(), Id3Version::V1_1);

	assert!(
		read_from(&mut file, ParseOptions::new().read_id3v1(false))
			.unwrap()
			.is_none()
	);
}

#[test_log::test]
fn genre_list() {
	assert_eq!(GENRES.len(), 192);
	assert_eq!(GENRES[50], "Darkwave");
	assert_eq!(
		GENRES.iter().position(|genre| *genre == "Hard Rock"),
		Some(79)
	);
}
