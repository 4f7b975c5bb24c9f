use crate::util::{AUDIO, id3v1, tag, temp_file, v2_frame, v4_frame};

use cuetag::config::ParseOptions;
use cuetag::id3::{Id3Tag, Id3Version, detect_versions, read_all, select_version};

#[test_log::test]
fn both_tags() {
	let mut bytes = tag(4, 0, &v4_frame("TIT2", 0, b"\x03New title"));
	bytes.extend_from_slice(AUDIO);
	bytes.extend(id3v1("Old title", "", "", Some(2), 0));

	let mut file = temp_file(&bytes);
	let versions = detect_versions(&mut file).unwrap();
	assert_eq!(versions, vec![Id3Version::V2_4, Id3Version::V1_1]);
	assert_eq!(select_version(&versions), Some(Id3Version::V2_4));

	let tags = read_all(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(tags.len(), 2);

	let Id3Tag::Id3v2(v2) = &tags[0] else {
		panic!("Expected the ID3v2 tag first");
	};
	assert_eq!(v2.title().as_deref(), Some("New title"));

	let Id3Tag::Id3v1(v1) = &tags[1] else {
		panic!("Expected the ID3v1 tag last");
	};
	assert_eq!(v1.title.as_deref(), Some("Old title"));
}

#[test_log::test]
fn broken_id3v2_can_be_skipped_for_id3v1() {
	let mut bytes = tag(2, 0, &v2_frame("TT2", b"\x09Title"));
	bytes.extend_from_slice(AUDIO);
	bytes.extend(id3v1("Title", "", "", None, 0));

	let mut file = temp_file(&bytes);
	assert_eq!(
		detect_versions(&mut file).unwrap(),
		vec![Id3Version::V2_2, Id3Version::V1]
	);

	assert!(read_all(&mut file, ParseOptions::new()).is_err());

	let tags = read_all(&mut file, ParseOptions::new().read_id3v2(false)).unwrap();
	assert_eq!(tags.len(), 1);
	assert_eq!(tags[0].version(), Id3Version::V1);
}

#[test_log::test]
fn nothing_found() {
	let mut file = temp_file(AUDIO);
	assert!(detect_versions(&mut file).unwrap().is_empty());
	assert_eq!(select_version(&[]), None);
	assert!(read_all(&mut file, ParseOptions::new()).unwrap().is_empty());
}
