//! Contains the errors that can arise within cuetag
//!
//! The primary error is [`CuetagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Note that a missing tag is *not* an error. Every reader returns `Ok(None)` when the
//! expected signature or version isn't found.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, CuetagError>`
pub type Result<T> = std::result::Result<T, CuetagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The byte source ended before a declared length was satisfied
	TruncatedInput,
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
	TooMuchData,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),
	/// Errors that arise while parsing a cue sheet
	CueSheet(CueSheetError),

	// Conversions for external errors
	/// Unable to convert bytes to a str
	StrFromUtf8(std::str::Utf8Error),
	/// Represents all cases of [`std::io::Error`] other than an unexpected EOF
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The types of errors that can occur while reading ID3v2 tags
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// A synchsafe integer had a byte with its most significant bit set
	MalformedSize,
	/// Arises when a compressed ID3v2.2 tag is encountered
	///
	/// No compression scheme was ever defined for ID3v2.2.
	/// As such, the tag can't be read.
	V2Compression,
	/// Arises when an extended header sub-field disagrees with its mandated length
	InvalidExtendedHeader(&'static str),

	// Frame
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
	/// A text encoding byte outside of `0..=3`
	UnsupportedEncoding(u8),
	/// A field that must be null terminated ran out of bytes before a terminator
	UnterminatedField,

	// Compression
	#[cfg(feature = "id3v2_compression_support")]
	/// Arises when a compressed frame is unable to be decompressed
	Decompression(String),
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::MalformedSize => write!(f, "Found a synchsafe integer with its high bit set"),
			Self::V2Compression => write!(f, "Encountered a compressed ID3v2.2 tag"),
			Self::InvalidExtendedHeader(reason) => {
				write!(f, "Found an invalid extended header: {reason}")
			},

			// Frame
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::UnsupportedEncoding(encoding) => {
				write!(f, "Found an unsupported text encoding: {encoding}")
			},
			Self::UnterminatedField => {
				write!(f, "Expected a null terminator within the field")
			},

			// Compression
			#[cfg(feature = "id3v2_compression_support")]
			Self::Decompression(err) => write!(f, "Failed to decompress frame: {err}"),
		}
	}
}

/// An error that arises while reading an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// An error that arises while parsing a cue sheet
#[derive(Clone, PartialEq, Eq)]
pub struct CueSheetError {
	line: usize,
	message: String,
}

impl CueSheetError {
	/// Create a `CueSheetError` for a 1-based line number
	#[must_use]
	pub fn new(line: usize, message: impl Into<String>) -> Self {
		Self {
			line,
			message: message.into(),
		}
	}

	/// The 1-based line the error was found on
	pub fn line(&self) -> usize {
		self.line
	}

	/// The error description
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl Debug for CueSheetError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "CueSheet(line {}): {:?}", self.line, self.message)
	}
}

impl Display for CueSheetError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Cue sheet, line {}: {}", self.line, self.message)
	}
}

/// Errors that could occur within cuetag
pub struct CuetagError {
	pub(crate) kind: ErrorKind,
}

impl CuetagError {
	/// Create a `CuetagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::error::{CuetagError, ErrorKind};
	///
	/// let truncated = CuetagError::new(ErrorKind::TruncatedInput);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::error::{CuetagError, ErrorKind};
	///
	/// let truncated = CuetagError::new(ErrorKind::TruncatedInput);
	/// if let ErrorKind::TruncatedInput = truncated.kind() {
	/// 	println!("The file is cut short!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the [`Id3v2ErrorKind`], if this is an ID3v2 error
	pub fn id3v2_kind(&self) -> Option<&Id3v2ErrorKind> {
		match &self.kind {
			ErrorKind::Id3v2(err) => Some(err.kind()),
			_ => None,
		}
	}
}

impl std::error::Error for CuetagError {}

impl Debug for CuetagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for CuetagError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<Id3v2ErrorKind> for CuetagError {
	fn from(input: Id3v2ErrorKind) -> Self {
		Self {
			kind: ErrorKind::Id3v2(Id3v2Error::new(input)),
		}
	}
}

impl From<CueSheetError> for CuetagError {
	fn from(input: CueSheetError) -> Self {
		Self {
			kind: ErrorKind::CueSheet(input),
		}
	}
}

impl From<std::io::Error> for CuetagError {
	fn from(input: std::io::Error) -> Self {
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::TruncatedInput,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::str::Utf8Error> for CuetagError {
	fn from(input: std::str::Utf8Error) -> Self {
		Self {
			kind: ErrorKind::StrFromUtf8(input),
		}
	}
}

impl From<TryReserveError> for CuetagError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for CuetagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::TruncatedInput => {
				write!(f, "The input ended before a declared length was satisfied")
			},
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
			ErrorKind::CueSheet(ref cue_err) => write!(f, "{cue_err}"),

			// Conversions
			ErrorKind::StrFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),
		}
	}
}
