//! Cue sheets
//!
//! A cue sheet is a text file describing the layout of a CD: the audio files it was ripped to,
//! and the tracks and indices within them.
//!
//! # Examples
//!
//! ```rust
//! use cuetag::cue::{CueSheet, Position};
//!
//! # fn main() -> cuetag::error::Result<()> {
//! let sheet = CueSheet::parse(
//! 	r#"PERFORMER "Some Artist"
//! TITLE "Some Album"
//! FILE "album.wav" WAVE
//!   TRACK 01 AUDIO
//!     TITLE "First"
//!     INDEX 01 00:00:00
//!   TRACK 02 AUDIO
//!     TITLE "Second"
//!     PERFORMER "Guest"
//!     INDEX 00 03:12:40
//!     INDEX 01 03:14:00
//! "#,
//! )?;
//!
//! let second = sheet.track_by_number(2).expect("track 2 should exist");
//! assert_eq!(second.title(), Some("Second"));
//! assert_eq!(second.performer(), Some("Guest"));
//! assert_eq!(second.file_name(), "album.wav");
//! assert_eq!(second.start(), Some(Position::new(3, 14, 0).unwrap()));
//!
//! // Missing values fall back to the sheet
//! let first = sheet.track_by_number(1).expect("track 1 should exist");
//! assert_eq!(first.performer(), Some("Some Artist"));
//! # Ok(()) }
//! ```

mod parse;
mod position;
mod sheet;

pub use position::{FRAMES_PER_SECOND, Position};
pub use sheet::{CueSheet, FileData, FileType, Index, TrackData, TrackDataType, TrackFlags, TrackRef};
