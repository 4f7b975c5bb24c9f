use super::position::Position;
use super::sheet::{CueSheet, FileData, FileType, Index, TrackData, TrackDataType};
use crate::error::{CueSheetError, Result};
use crate::util::text::latin1_decode;

use std::io::Read;

/// Which command the following commands apply to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Scope {
	Sheet,
	File,
	Track,
}

struct Parser {
	sheet: CueSheet,
	scope: Scope,
	line: usize,
}

impl Parser {
	fn error(&self, message: impl Into<String>) -> CueSheetError {
		CueSheetError::new(self.line, message)
	}

	fn current_file(&mut self) -> Option<&mut FileData> {
		self.sheet.files.last_mut()
	}

	fn current_track(&mut self) -> std::result::Result<&mut TrackData, CueSheetError> {
		let line = self.line;
		if self.scope != Scope::Track {
			return Err(CueSheetError::new(line, "command is only valid within a TRACK"));
		}

		self.sheet
			.files
			.last_mut()
			.and_then(|file| file.tracks.last_mut())
			.ok_or_else(|| CueSheetError::new(line, "command is only valid within a TRACK"))
	}

	fn set_text(&mut self, command: &str, value: String) -> std::result::Result<(), CueSheetError> {
		let target = match self.scope {
			Scope::Track => {
				let track = self.current_track()?;
				match command {
					"TITLE" => &mut track.title,
					"PERFORMER" => &mut track.performer,
					_ => &mut track.songwriter,
				}
			},
			Scope::Sheet | Scope::File => match command {
				"TITLE" => &mut self.sheet.title,
				"PERFORMER" => &mut self.sheet.performer,
				_ => &mut self.sheet.songwriter,
			},
		};

		*target = Some(value);
		Ok(())
	}

	fn parse_line(&mut self, line: &str) -> std::result::Result<(), CueSheetError> {
		let line = line.trim();
		if line.is_empty() {
			return Ok(());
		}

		let (command, rest) = line
			.split_once(|c: char| c.is_ascii_whitespace())
			.unwrap_or((line, ""));
		let command = command.to_ascii_uppercase();
		let rest = rest.trim_start();

		// Comments are kept verbatim
		if command == "REM" {
			let comment = rest.to_owned();
			match self.scope {
				Scope::Track => self.current_track()?.comments.push(comment),
				Scope::Sheet | Scope::File => self.sheet.comments.push(comment),
			}

			return Ok(());
		}

		let args = tokenize(rest).map_err(|message| self.error(message))?;
		let arg = |n: usize| -> std::result::Result<&str, CueSheetError> {
			args.get(n).map(String::as_str).ok_or_else(|| {
				CueSheetError::new(self.line, format!("{command} is missing an argument"))
			})
		};

		match &*command {
			"CATALOG" => {
				let catalog = arg(0)?;
				if catalog.len() != 13 || !catalog.bytes().all(|b| b.is_ascii_digit()) {
					return Err(self.error("CATALOG must be 13 digits"));
				}

				self.sheet.catalog = Some(catalog.to_owned());
			},
			"CDTEXTFILE" => self.sheet.cdtext_file = Some(arg(0)?.to_owned()),
			"FILE" => {
				let file = arg(0)?.to_owned();
				let file_type = args
					.get(1)
					.map_or(FileType::Other(String::new()), |t| FileType::from_keyword(t));

				self.sheet.files.push(FileData {
					file,
					file_type,
					tracks: Vec::new(),
				});
				self.scope = Scope::File;
			},
			"TRACK" => {
				let number = parse_number(arg(0)?, 1..=99)
					.ok_or_else(|| self.error("TRACK number must be within 1..=99"))?;
				let data_type = TrackDataType::from_keyword(arg(1)?);

				let line = self.line;
				let Some(file) = self.current_file() else {
					return Err(CueSheetError::new(line, "TRACK found before any FILE"));
				};

				file.tracks.push(TrackData::new(number, data_type));
				self.scope = Scope::Track;
			},
			"INDEX" => {
				let number = parse_number(arg(0)?, 0..=99)
					.ok_or_else(|| self.error("INDEX number must be within 0..=99"))?;
				let position = parse_position(arg(1)?).map_err(|message| self.error(message))?;

				self.current_track()?
					.indices
					.push(Index { number, position });
			},
			"PREGAP" | "POSTGAP" => {
				let position = parse_position(arg(0)?).map_err(|message| self.error(message))?;

				let track = self.current_track()?;
				if command == "PREGAP" {
					track.pregap = Some(position);
				} else {
					track.postgap = Some(position);
				}
			},
			"ISRC" => {
				let isrc = arg(0)?.to_owned();
				if isrc.len() != 12 || !isrc.bytes().all(|b| b.is_ascii_alphanumeric()) {
					return Err(self.error("ISRC must be 12 alphanumeric characters"));
				}

				self.current_track()?.isrc = Some(isrc);
			},
			"FLAGS" => {
				let mut flags = self.current_track()?.flags;
				for flag in &args {
					match &*flag.to_ascii_uppercase() {
						"DCP" => flags.digital_copy_permitted = true,
						"4CH" => flags.four_channel = true,
						"PRE" => flags.pre_emphasis = true,
						"SCMS" => flags.serial_copy_management = true,
						_ => return Err(self.error(format!("unknown track flag: {flag}"))),
					}
				}

				self.current_track()?.flags = flags;
			},
			"TITLE" | "PERFORMER" | "SONGWRITER" => {
				let value = arg(0)?.to_owned();
				self.set_text(&command, value)?;
			},
			_ => log::warn!(
				"Skipping unknown cue sheet command on line {}: {}",
				self.line,
				command
			),
		}

		Ok(())
	}
}

/// Split command arguments on whitespace, keeping quoted arguments together
fn tokenize(input: &str) -> std::result::Result<Vec<String>, &'static str> {
	let mut tokens = Vec::new();
	let mut chars = input.chars().peekable();

	while let Some(&c) = chars.peek() {
		if c.is_whitespace() {
			chars.next();
			continue;
		}

		let mut token = String::new();
		if c == '"' {
			chars.next();
			loop {
				match chars.next() {
					Some('"') => break,
					Some(c) => token.push(c),
					None => return Err("unterminated quoted argument"),
				}
			}
		} else {
			while let Some(&c) = chars.peek() {
				if c.is_whitespace() {
					break;
				}

				token.push(c);
				chars.next();
			}
		}

		tokens.push(token);
	}

	Ok(tokens)
}

fn parse_number(input: &str, range: std::ops::RangeInclusive<u8>) -> Option<u8> {
	if !input.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	input.parse().ok().filter(|n| range.contains(n))
}

fn parse_position(input: &str) -> std::result::Result<Position, String> {
	input
		.parse()
		.map_err(|_| format!("invalid position: {input:?}"))
}

impl CueSheet {
	/// Parse a cue sheet
	///
	/// Commands are case insensitive. Unknown commands are skipped.
	///
	/// # Errors
	///
	/// * A command is missing an argument, or has an invalid one
	/// * A track command (`INDEX`, `ISRC`, etc.) is found outside of a `TRACK`
	/// * A `TRACK` is found before any `FILE`
	///
	/// The error holds the (1-based) line number it was found on.
	pub fn parse(input: &str) -> Result<Self> {
		let mut parser = Parser {
			sheet: CueSheet::default(),
			scope: Scope::Sheet,
			line: 0,
		};

		for line in input.trim_start_matches('\u{FEFF}').lines() {
			parser.line += 1;
			parser.parse_line(line)?;
		}

		log::debug!(
			"Parsed a cue sheet with {} file(s) and {} track(s)",
			parser.sheet.files.len(),
			parser.sheet.track_count()
		);

		Ok(parser.sheet)
	}

	/// Read a cue sheet from `reader`
	///
	/// The text is expected to be UTF-8. Anything that isn't valid UTF-8 is read as Latin-1,
	/// which is common for older rippers.
	///
	/// # Errors
	///
	/// * Unable to read
	/// * See [`CueSheet::parse`]
	pub fn read_from<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;

		match String::from_utf8(bytes) {
			Ok(text) => Self::parse(&text),
			Err(e) => {
				log::warn!("Cue sheet is not valid UTF-8, reading as Latin-1");
				Self::parse(&latin1_decode(e.as_bytes()))
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::cue::{CueSheet, FileType, Position, TrackDataType};
	use crate::error::ErrorKind;

	const SHEET: &str = r#"REM GENRE Electronic
REM DATE 1998
CATALOG 0724384960650
PERFORMER "Some Artist"
TITLE "Some Album"
FILE "Disc 1.flac" WAVE
  TRACK 01 AUDIO
    TITLE "Intro"
    ISRC GBAYE9800001
    FLAGS DCP PRE
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "Second Song"
    PERFORMER Guest
    REM COMPOSER Someone
    PREGAP 00:02:00
    INDEX 00 04:10:50
    INDEX 01 04:12:00
FILE "bonus.mp3" MP3
  TRACK 03 AUDIO
    INDEX 01 00:00:00
"#;

	fn line_of(err: crate::error::CuetagError) -> usize {
		match err.kind() {
			ErrorKind::CueSheet(err) => err.line(),
			kind => panic!("Expected a cue sheet error, got {kind:?}"),
		}
	}

	#[test_log::test]
	fn full_sheet() {
		let sheet = CueSheet::parse(SHEET).unwrap();

		assert_eq!(sheet.comments, vec!["GENRE Electronic", "DATE 1998"]);
		assert_eq!(sheet.catalog.as_deref(), Some("0724384960650"));
		assert_eq!(sheet.files.len(), 2);
		assert_eq!(sheet.files[0].file, "Disc 1.flac");
		assert_eq!(sheet.files[0].file_type, FileType::Wave);
		assert_eq!(sheet.files[1].file_type, FileType::Mp3);
		assert_eq!(sheet.track_count(), 3);

		let first = sheet.track_by_number(1).unwrap();
		assert_eq!(first.track.isrc.as_deref(), Some("GBAYE9800001"));
		assert!(first.track.flags.digital_copy_permitted);
		assert!(first.track.flags.pre_emphasis);
		assert!(!first.track.flags.four_channel);
		assert_eq!(first.track.data_type, TrackDataType::Audio);
		assert_eq!(first.end(), Position::new(4, 10, 50));

		let second = sheet.track_by_number(2).unwrap();
		assert_eq!(second.title(), Some("Second Song"));
		assert_eq!(second.performer(), Some("Guest"));
		assert_eq!(second.track.comments, vec!["COMPOSER Someone"]);
		assert_eq!(second.track.pregap, Position::new(0, 2, 0));
		assert_eq!(second.pregap_start(), Position::new(4, 10, 50));
		assert_eq!(second.start(), Position::new(4, 12, 0));
		assert_eq!(second.end(), None);

		let third = sheet.track_by_number(3).unwrap();
		assert_eq!(third.file_name(), "bonus.mp3");
		assert_eq!(third.performer(), Some("Some Artist"));
		assert_eq!(third.title(), Some("Some Album"));
	}

	#[test_log::test]
	fn case_insensitive_and_unknown_commands() {
		let sheet = CueSheet::parse(
			"file \"a.wav\" wave\ntrack 1 audio\nindex 1 00:01:02\nDISCID 12345\n",
		)
		.unwrap();

		let track = sheet.track_by_number(1).unwrap();
		assert_eq!(track.start(), Position::new(0, 1, 2));
	}

	#[test_log::test]
	fn errors_have_line_numbers() {
		let err = CueSheet::parse("TITLE \"x\"\nTRACK 01 AUDIO\n").unwrap_err();
		assert_eq!(line_of(err), 2);

		let err = CueSheet::parse("FILE \"a.wav\" WAVE\n\nINDEX 01 00:00:00\n").unwrap_err();
		assert_eq!(line_of(err), 3);

		let err = CueSheet::parse("FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\nINDEX 01 00:61:00\n")
			.unwrap_err();
		assert_eq!(line_of(err), 3);

		let err = CueSheet::parse("TITLE \"unterminated\n").unwrap_err();
		assert_eq!(line_of(err), 1);

		let err = CueSheet::parse("CATALOG 123\n").unwrap_err();
		assert_eq!(line_of(err), 1);

		let err = CueSheet::parse("FILE \"a.wav\" WAVE\nTRACK 100 AUDIO\n").unwrap_err();
		assert_eq!(line_of(err), 2);

		let err = CueSheet::parse("PERFORMER\n").unwrap_err();
		assert_eq!(line_of(err), 1);
	}

	#[test_log::test]
	fn latin1_fallback() {
		let mut bytes = b"TITLE \"Caf".to_vec();
		bytes.push(0xE9);
		bytes.extend_from_slice(b"\"\n");

		let sheet = CueSheet::read_from(&mut &bytes[..]).unwrap();
		assert_eq!(sheet.title.as_deref(), Some("Caf\u{E9}"));
	}

	#[test_log::test]
	fn byte_order_mark_is_ignored() {
		let sheet = CueSheet::parse("\u{FEFF}TITLE \"x\"\r\n").unwrap();
		assert_eq!(sheet.title.as_deref(), Some("x"));
	}
}
