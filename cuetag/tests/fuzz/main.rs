#![allow(missing_docs)]

use cuetag::config::ParseOptions;
use cuetag::cue::CueSheet;
use cuetag::id3::v2::read_id3v2;
use cuetag::id3::{detect_versions, read_all};

use std::io::Cursor;
use std::thread;
use std::time::Instant;

use proptest::prelude::*;
use proptest::sample::Index;

mod id3v2;
mod synchsafe;

/// A single edit: where, a byte to use, and which kind of edit
pub type Mutation = (Index, u8, u8);

/// Up to 8 bit flips, byte replacements, removals, and truncations
pub fn mutations() -> impl Strategy<Value = Vec<Mutation>> {
	prop::collection::vec((any::<Index>(), any::<u8>(), 0..4_u8), 1..8)
}

pub fn mutate(input: &[u8], mutations: &[Mutation]) -> Vec<u8> {
	let mut out = input.to_vec();
	for (at, byte, kind) in mutations {
		if out.is_empty() {
			break;
		}

		let at = at.index(out.len());
		match kind {
			0 => out[at] ^= 1 << (byte % 8),
			1 => out[at] = *byte,
			2 => {
				out.remove(at);
			},
			_ => out.truncate(at),
		}
	}

	out
}

/// Run every reader over `data`, only checking that nothing panics or hangs
#[allow(clippy::missing_panics_doc)]
pub fn no_panic(data: Vec<u8>) {
	let instant = Instant::now();
	let thread = thread::spawn(move || {
		let _ = read_id3v2(&mut &data[..], ParseOptions::new().keep_unknown_frames(true));
		let _ = detect_versions(&mut Cursor::new(&data));
		let _ = read_all(&mut Cursor::new(&data), ParseOptions::new());
		let _ = CueSheet::read_from(&mut &data[..]);
	});

	while instant.elapsed().as_secs() < 3 {
		if thread.is_finished() {
			assert!(thread.join().is_ok(), "Reader panicked");
			return;
		}
	}

	panic!("Failed to run test");
}
