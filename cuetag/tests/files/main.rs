#![allow(missing_docs)]

mod cue;
mod detect;
mod id3v1;
mod id3v2;
mod util;
