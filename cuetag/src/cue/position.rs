use crate::error::{CuetagError, ErrorKind, Result};

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// The number of CD frames (sectors) in a second
pub const FRAMES_PER_SECOND: u32 = 75;

/// A position in a cue sheet, as `MM:SS:FF`
///
/// `FF` is a number of CD frames, of which there are [`FRAMES_PER_SECOND`] in a second.
/// Minutes are not limited to 99.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	pub(crate) minutes: u32,
	pub(crate) seconds: u8,
	pub(crate) frames: u8,
}

impl Position {
	/// Create a new `Position`
	///
	/// Returns `None` if `seconds` >= 60 or `frames` >= 75.
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::cue::Position;
	///
	/// assert!(Position::new(3, 59, 74).is_some());
	/// assert!(Position::new(3, 60, 0).is_none());
	/// assert!(Position::new(3, 0, 75).is_none());
	/// ```
	pub fn new(minutes: u32, seconds: u8, frames: u8) -> Option<Self> {
		if seconds >= 60 || u32::from(frames) >= FRAMES_PER_SECOND {
			return None;
		}

		Some(Self {
			minutes,
			seconds,
			frames,
		})
	}

	/// Create a `Position` from a number of CD frames
	///
	/// # Examples
	///
	/// ```rust
	/// use cuetag::cue::Position;
	///
	/// let position = Position::from_total_frames(75 * 61 + 3);
	/// assert_eq!(position.to_string(), "01:01:03");
	/// ```
	pub fn from_total_frames(total_frames: u64) -> Self {
		let frames_per_second = u64::from(FRAMES_PER_SECOND);
		let total_seconds = total_frames / frames_per_second;

		Self {
			minutes: (total_seconds / 60) as u32,
			seconds: (total_seconds % 60) as u8,
			frames: (total_frames % frames_per_second) as u8,
		}
	}

	/// Minutes
	pub fn minutes(&self) -> u32 {
		self.minutes
	}

	/// Seconds, `0..60`
	pub fn seconds(&self) -> u8 {
		self.seconds
	}

	/// CD frames, `0..75`
	pub fn frames(&self) -> u8 {
		self.frames
	}

	/// The position as a number of CD frames
	pub fn total_frames(&self) -> u64 {
		(u64::from(self.minutes) * 60 + u64::from(self.seconds)) * u64::from(FRAMES_PER_SECOND)
			+ u64::from(self.frames)
	}

	/// The position as a duration from the start of the file
	pub fn as_duration(&self) -> Duration {
		let seconds = u64::from(self.minutes) * 60 + u64::from(self.seconds);
		Duration::from_secs(seconds)
			+ Duration::from_nanos(u64::from(self.frames) * 1_000_000_000 / u64::from(FRAMES_PER_SECOND))
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{:02}:{:02}:{:02}",
			self.minutes, self.seconds, self.frames
		)
	}
}

impl FromStr for Position {
	type Err = CuetagError;

	fn from_str(s: &str) -> Result<Self> {
		fn component<T: FromStr>(part: Option<&str>) -> Option<T> {
			let part = part?;
			if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
				return None;
			}

			part.parse().ok()
		}

		let mut parts = s.trim().split(':');
		let minutes = component::<u32>(parts.next());
		let seconds = component::<u8>(parts.next());
		let frames = component::<u8>(parts.next());

		match (minutes, seconds, frames, parts.next()) {
			(Some(minutes), Some(seconds), Some(frames), None) => {
				Position::new(minutes, seconds, frames).ok_or_else(|| {
					CuetagError::new(ErrorKind::TextDecode("Cue sheet position is out of range"))
				})
			},
			_ => Err(CuetagError::new(ErrorKind::TextDecode(
				"Cue sheet position is not in the form MM:SS:FF",
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Position;

	#[test_log::test]
	fn parse_and_display() {
		let position: Position = "04:32:10".parse().unwrap();
		assert_eq!(position.minutes(), 4);
		assert_eq!(position.seconds(), 32);
		assert_eq!(position.frames(), 10);
		assert_eq!(position.to_string(), "04:32:10");

		// Minutes are unbounded
		let long: Position = "123:00:00".parse().unwrap();
		assert_eq!(long.to_string(), "123:00:00");
	}

	#[test_log::test]
	fn invalid_positions() {
		for input in ["", "1:2", "1:2:3:4", "00:60:00", "00:00:75", "a:00:00", "-1:00:00"] {
			assert!(input.parse::<Position>().is_err(), "{input}");
		}
	}

	#[test_log::test]
	fn total_frames() {
		let position = Position::new(2, 1, 5).unwrap();
		assert_eq!(position.total_frames(), (121 * 75) + 5);
		assert_eq!(Position::from_total_frames(position.total_frames()), position);
	}

	#[test_log::test]
	fn ordering_and_duration() {
		let a = Position::new(0, 59, 74).unwrap();
		let b = Position::new(1, 0, 0).unwrap();
		assert!(a < b);

		let one_second = Position::new(0, 1, 0).unwrap().as_duration();
		assert_eq!(one_second.as_secs(), 1);
		assert_eq!(Position::new(0, 0, 15).unwrap().as_duration().as_millis(), 200);
	}
}
