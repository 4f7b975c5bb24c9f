mod comment;
mod involved_people;
mod picture;
mod podcast;
mod raw;
mod text;
mod unique_identifier;
mod url;
mod user_text;
mod user_url;

pub use comment::CommentFrame;
pub use involved_people::InvolvedPeopleListFrame;
pub use picture::PictureFrame;
pub use podcast::PodcastMarkerFrame;
pub use raw::RawFrame;
pub use text::TextFrame;
pub use unique_identifier::{MusicCdIdentifierFrame, UniqueFileIdentifierFrame};
pub use url::UrlFrame;
pub use user_text::UserTextFrame;
pub use user_url::UserUrlFrame;

use crate::error::Result;
use crate::macros::id3v2_err;

/// Take `consumed` bytes out of a frame body budget
fn shrink_budget(budget: usize, consumed: usize) -> Result<usize> {
	match budget.checked_sub(consumed) {
		Some(remaining) => Ok(remaining),
		None => id3v2_err!(BadFrameLength),
	}
}
