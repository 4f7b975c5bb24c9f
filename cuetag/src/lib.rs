//! Decode ID3 tags, and read cue sheets.
//!
//! # ID3
//!
//! All ID3 versions are supported for reading: ID3v1, ID3v1.1, ID3v2.2, ID3v2.3, and ID3v2.4.
//! Tags are never written.
//!
//! ## Reading the preferred tag of a file
//!
//! ```rust,no_run
//! # fn main() -> cuetag::error::Result<()> {
//! use cuetag::config::ParseOptions;
//! use cuetag::id3::{read_from_path, Id3Tag};
//!
//! match read_from_path("test.mp3", ParseOptions::new())? {
//! 	Some(Id3Tag::Id3v2(tag)) => println!("Title: {:?}", tag.title()),
//! 	Some(Id3Tag::Id3v1(tag)) => println!("Title: {:?}", tag.title),
//! 	None => println!("No tag found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Looking up frames
//!
//! Frames are looked up by their [`CanonicalFrameType`](id3::v2::CanonicalFrameType), which is the
//! same no matter the version the tag was written in.
//!
//! ```rust
//! # fn main() -> cuetag::error::Result<()> {
//! use cuetag::config::ParseOptions;
//! use cuetag::id3::v2::{read_id3v2, CanonicalFrameType, Frame};
//!
//! // An ID3v2.2 tag, using 3 character identifiers
//! let bytes = b"ID3\x02\x00\x00\x00\x00\x00\x0ATP1\x00\x00\x04\x00Foo";
//! let tag = read_id3v2(&mut &bytes[..], ParseOptions::new())?.expect("tag should be present");
//!
//! let artist = tag.get(CanonicalFrameType::Performer).expect("frame should be present");
//! assert_eq!(artist.id().as_str(), "TP1");
//!
//! if let Frame::Text(text) = artist {
//! 	assert_eq!(text.value, "Foo");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cue sheets
//!
//! See [`CueSheet`](cue::CueSheet).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod cue;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod picture;
mod util;

pub use util::text::TextEncoding;
