//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! See:
//!
//! * [`Id3v2Tag`]
//! * [`Frame`]
//! * [`CanonicalFrameType`]

mod dictionary;
mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
mod restrictions;
pub(crate) mod tag;
pub mod util;

// Exports

pub use dictionary::{CanonicalFrameType, canonical_type_for, identifier_for};
pub use header::{Id3v2Header, Id3v2TagFlags, Id3v2Version};
pub use read::read_id3v2;

pub use tag::Id3v2Tag;

pub use items::*;

pub use frame::header::{FrameHeader, FrameId};
pub use frame::{Frame, FrameFlags};

pub use restrictions::{
	ImageSizeRestrictions, TagRestrictions, TagSizeRestrictions, TextSizeRestrictions,
};
