use crate::util::temp_file;

use cuetag::cue::{CueSheet, FileType, Position, TrackDataType};
use cuetag::error::ErrorKind;

const SHEET: &str = r#"REM GENRE Electronic
REM DATE 2003
CATALOG 0724384260927
PERFORMER "The Artist"
TITLE "The Album"
FILE "Disc 1.flac" WAVE
  TRACK 01 AUDIO
    TITLE "Opening"
    ISRC GBAYE0300001
    FLAGS DCP PRE
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "Interlude"
    PERFORMER "Guest"
    REM REPLAYGAIN_TRACK_GAIN -7.10 dB
    INDEX 00 04:01:50
    INDEX 01 04:03:00
FILE "Disc 1 bonus.wav" WAVE
  TRACK 03 AUDIO
    PREGAP 00:02:00
    INDEX 01 00:00:00
    POSTGAP 00:01:00
"#;

fn pos(minutes: u32, seconds: u8, frames: u8) -> Position {
	Position::new(minutes, seconds, frames).unwrap()
}

#[test_log::test]
fn full_sheet() {
	let sheet = CueSheet::parse(SHEET).unwrap();

	assert_eq!(sheet.catalog.as_deref(), Some("0724384260927"));
	assert_eq!(sheet.title.as_deref(), Some("The Album"));
	assert_eq!(sheet.comments, vec!["GENRE Electronic", "DATE 2003"]);
	assert_eq!(sheet.files.len(), 2);
	assert_eq!(sheet.files[0].file, "Disc 1.flac");
	assert_eq!(sheet.files[0].file_type, FileType::Wave);
	assert_eq!(sheet.track_count(), 3);

	let numbers = sheet
		.tracks()
		.map(|track| track.track.number)
		.collect::<Vec<_>>();
	assert_eq!(numbers, vec![1, 2, 3]);
}

#[test_log::test]
fn track_details() {
	let sheet = CueSheet::parse(SHEET).unwrap();

	let first = sheet.track_by_number(1).unwrap();
	assert_eq!(first.track.data_type, TrackDataType::Audio);
	assert_eq!(first.track.isrc.as_deref(), Some("GBAYE0300001"));
	assert!(first.track.flags.digital_copy_permitted);
	assert!(first.track.flags.pre_emphasis);
	assert!(!first.track.flags.four_channel);
	assert_eq!(first.performer(), Some("The Artist"));
	assert_eq!(first.start(), Some(pos(0, 0, 0)));
	// Ends where the next track's pregap starts
	assert_eq!(first.end(), Some(pos(4, 1, 50)));

	let second = sheet.track_by_number(2).unwrap();
	assert_eq!(second.performer(), Some("Guest"));
	assert_eq!(second.pregap_start(), Some(pos(4, 1, 50)));
	assert_eq!(second.start(), Some(pos(4, 3, 0)));
	assert_eq!(second.track.comments, vec!["REPLAYGAIN_TRACK_GAIN -7.10 dB"]);
	// Last track of its file
	assert_eq!(second.end(), None);

	let third = sheet.track_by_number(3).unwrap();
	assert_eq!(third.file_name(), "Disc 1 bonus.wav");
	assert_eq!(third.title(), Some("The Album"));
	assert_eq!(third.track.pregap, Some(pos(0, 2, 0)));
	assert_eq!(third.track.postgap, Some(pos(0, 1, 0)));

	assert!(sheet.track_by_number(4).is_none());
}

#[test_log::test]
fn errors_carry_line_numbers() {
	let input = "FILE \"a.wav\" WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:61:00\n";
	let err = CueSheet::parse(input).unwrap_err();

	let ErrorKind::CueSheet(cue_err) = err.kind() else {
		panic!("Expected a cue sheet error, got {err:?}");
	};
	assert_eq!(cue_err.line(), 3);
}

#[test_log::test]
fn track_before_file() {
	let err = CueSheet::parse("TRACK 01 AUDIO\n").unwrap_err();
	let ErrorKind::CueSheet(cue_err) = err.kind() else {
		panic!("Expected a cue sheet error, got {err:?}");
	};
	assert_eq!(cue_err.line(), 1);
}

#[test_log::test]
fn index_outside_of_track() {
	assert!(CueSheet::parse("FILE \"a.wav\" WAVE\nINDEX 01 00:00:00\n").is_err());
}

#[test_log::test]
fn case_insensitive_and_unknown_commands() {
	let input = "\u{FEFF}title \"Album\"\nARRANGER \"Nobody\"\nfile a.wav wave\ntrack 1 audio\nindex 1 00:00:00\n";
	let sheet = CueSheet::parse(input).unwrap();

	assert_eq!(sheet.title.as_deref(), Some("Album"));
	assert_eq!(sheet.files[0].file, "a.wav");
	assert_eq!(sheet.track_by_number(1).unwrap().start(), Some(pos(0, 0, 0)));
}

#[test_log::test]
fn latin1_sheet() {
	let mut file = temp_file(b"TITLE \"Caf\xE9\"\n");
	let sheet = CueSheet::read_from(&mut file).unwrap();
	assert_eq!(sheet.title.as_deref(), Some("Café"));
}

#[test_log::test]
fn positions() {
	let position = "74:59:74".parse::<Position>().unwrap();
	assert_eq!(position.total_frames(), (74 * 60 + 59) * 75 + 74);
	assert_eq!(Position::from_total_frames(position.total_frames()), position);
	assert_eq!(position.to_string(), "74:59:74");

	assert!("00:00:75".parse::<Position>().is_err());
	assert!("00:00".parse::<Position>().is_err());
	assert!("-1:00:00".parse::<Position>().is_err());
}
