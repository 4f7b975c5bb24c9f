/// Options to control how cuetag reads tags
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_id3v2: bool,
	pub(crate) read_id3v1: bool,
	pub(crate) read_cover_art: bool,
	pub(crate) keep_unknown_frames: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_id3v2: true,
	/// 	read_id3v1: true,
	/// 	read_cover_art: true,
	/// 	keep_unknown_frames: false,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_id3v2: true,
			read_id3v1: true,
			read_cover_art: true,
			keep_unknown_frames: false,
		}
	}

	/// Whether or not to read ID3v2 tags
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::config::ParseOptions;
	///
	/// // Only the trailing ID3v1 tag is of interest
	/// let parsing_options = ParseOptions::new().read_id3v2(false);
	/// ```
	pub fn read_id3v2(&mut self, read_id3v2: bool) -> Self {
		self.read_id3v2 = read_id3v2;
		*self
	}

	/// Whether or not to read ID3v1 tags
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new().read_id3v1(false);
	/// ```
	pub fn read_id3v1(&mut self, read_id3v1: bool) -> Self {
		self.read_id3v1 = read_id3v1;
		*self
	}

	/// Whether or not to decode cover art
	///
	/// When disabled, picture frames are skipped by their declared size.
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::config::ParseOptions;
	///
	/// // Reading cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}

	/// Whether or not to keep frames with unknown identifiers
	///
	/// By default, a frame whose identifier isn't known (and doesn't start with `T` or `W`)
	/// is skipped. With this enabled, it is kept as a [`Frame::Raw`](crate::id3::v2::Frame::Raw)
	/// with a type of [`CanonicalFrameType::Unrecognised`](crate::id3::v2::CanonicalFrameType::Unrecognised).
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new().keep_unknown_frames(true);
	/// ```
	pub fn keep_unknown_frames(&mut self, keep_unknown_frames: bool) -> Self {
		self.keep_unknown_frames = keep_unknown_frames;
		*self
	}
}
