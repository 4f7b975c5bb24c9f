//! Utilities for working with unsynchronized ID3v2 content
//!
//! See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation) for an explanation.

use crate::error::Result;
use crate::macros::id3v2_err;

use std::io::Read;

/// How a multi-byte size field is encoded
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizeEncoding {
	/// Every byte carries 8 significant bits, most significant byte first
	Plain,
	/// Every byte carries 7 significant bits, its top bit must be clear
	Synchsafe,
}

impl SizeEncoding {
	/// Decode up to 4 bytes into an integer
	///
	/// # Errors
	///
	/// [`Id3v2ErrorKind::MalformedSize`](crate::error::Id3v2ErrorKind::MalformedSize) if this is
	/// [`SizeEncoding::Synchsafe`] and a byte has its top bit set.
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::id3::v2::util::synchsafe::SizeEncoding;
	///
	/// # fn main() -> cuetag::error::Result<()> {
	/// assert_eq!(SizeEncoding::Plain.decode(&[0x00, 0x00, 0x01, 0x7F])?, 0x17F);
	/// assert_eq!(SizeEncoding::Synchsafe.decode(&[0x00, 0x00, 0x01, 0x7F])?, 0xFF);
	///
	/// assert!(SizeEncoding::Synchsafe.decode(&[0x00, 0x00, 0x01, 0x80]).is_err());
	/// # Ok(()) }
	/// ```
	pub fn decode(self, bytes: &[u8]) -> Result<u32> {
		debug_assert!(bytes.len() <= 4);
		self.decode_wide(bytes).map(|n| n as u32)
	}

	/// Same as [`SizeEncoding::decode`], for fields wider than 4 bytes (ex. the 35-bit extended header CRC)
	pub fn decode_wide(self, bytes: &[u8]) -> Result<u64> {
		debug_assert!(bytes.len() <= 8);

		let mut value = 0u64;
		for byte in bytes {
			match self {
				Self::Plain => value = (value << 8) | u64::from(*byte),
				Self::Synchsafe => {
					if byte & 0x80 != 0 {
						id3v2_err!(MalformedSize);
					}

					value = (value << 7) | u64::from(*byte);
				},
			}
		}

		Ok(value)
	}

	/// Read `width` bytes from `reader` and decode them
	pub(crate) fn read<R>(self, reader: &mut R, width: usize) -> Result<u32>
	where
		R: Read,
	{
		let mut bytes = [0; 4];
		let bytes = &mut bytes[..width];
		reader.read_exact(bytes)?;

		self.decode(bytes)
	}
}

/// Reverse the unsynchronisation scheme over an entire buffer
///
/// Every `0xFF 0x00` pair is collapsed to `0xFF`.
pub(crate) fn resynchronise(content: &[u8]) -> Result<Vec<u8>> {
	// Never longer than the input, which is already in memory
	let mut out = Vec::with_capacity(content.len());
	UnsynchronizedStream::new(content).read_to_end(&mut out)?;

	Ok(out)
}

/// A reader for unsynchronized content
///
/// See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation) for an explanation.
///
/// # Examples
///
/// ```rust
/// use std::io::{Cursor, Read};
/// use cuetag::id3::v2::util::synchsafe::UnsynchronizedStream;
///
/// fn main() -> cuetag::error::Result<()> {
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
///
/// let mut unsynchronized_reader = UnsynchronizedStream::new(Cursor::new(content));
///
/// let mut unsynchronized_content = Vec::new();
/// unsynchronized_reader.read_to_end(&mut unsynchronized_content)?;
///
/// // All null bytes following `0xFF` have been removed
/// assert_eq!(unsynchronized_content, [0xFF, 0x1A, 0xFF, 0x15]);
/// # Ok(()) }
/// ```
pub struct UnsynchronizedStream<R> {
	reader: R,
	// Same buffer size as `BufReader`
	buf: [u8; 8 * 1024],
	bytes_available: usize,
	pos: usize,
	encountered_ff: bool,
}

impl<R> UnsynchronizedStream<R> {
	/// Create a new [`UnsynchronizedStream`]
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::id3::v2::util::synchsafe::UnsynchronizedStream;
	/// use std::io::Cursor;
	///
	/// let reader = Cursor::new([0xFF, 0x00, 0x1A]);
	/// let unsynchronized_reader = UnsynchronizedStream::new(reader);
	/// ```
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			buf: [0; 8 * 1024],
			bytes_available: 0,
			pos: 0,
			encountered_ff: false,
		}
	}
}

impl<R: Read> Read for UnsynchronizedStream<R> {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		let dest_len = buf.len();
		if dest_len == 0 {
			return Ok(0);
		}

		let mut dest_pos = 0;
		loop {
			if dest_pos == dest_len {
				break;
			}

			if self.pos >= self.bytes_available {
				self.bytes_available = self.reader.read(&mut self.buf)?;
				self.pos = 0;
			}

			// Exhausted the reader
			if self.bytes_available == 0 {
				break;
			}

			if self.encountered_ff {
				self.encountered_ff = false;

				// Only skip the next byte if this is valid unsynchronization
				// Otherwise just continue as normal
				if self.buf[self.pos] == 0 {
					self.pos += 1;
					continue;
				}
			}

			let current_byte = self.buf[self.pos];
			buf[dest_pos] = current_byte;
			dest_pos += 1;
			self.pos += 1;

			if current_byte == 0xFF {
				self.encountered_ff = true;
			}
		}

		Ok(dest_pos)
	}
}
