//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! ID3v1 is a fixed 128 byte block at the very end of a file. Every text field is
//! Latin-1, and limited to 30 characters (4 for the year).

pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;

pub use constants::{GENRES, ID3V1_TAG_SIZE};
pub use read::read_id3v1;
pub use tag::{Id3v1Revision, Id3v1Tag};
