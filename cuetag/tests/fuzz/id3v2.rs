use crate::{mutate, mutations, no_panic};

use proptest::prelude::*;

fn synchsafe(n: u32) -> [u8; 4] {
	[
		(n >> 21) as u8 & 0x7F,
		(n >> 14) as u8 & 0x7F,
		(n >> 7) as u8 & 0x7F,
		n as u8 & 0x7F,
	]
}

fn seed_tag() -> Vec<u8> {
	let mut body = Vec::new();
	for (id, frame) in [
		(&b"TIT2"[..], &b"\x01\xFF\xFET\x00i\x00t\x00l\x00e\x00"[..]),
		(b"COMM", b"\x00engdesc\x00content"),
		(b"APIC", b"\x00image/png\x00\x03\x00\x89PNG"),
		(b"TXXX", b"\x03key\x00value"),
		(b"IPLS", b"\x00role\x00person\x00"),
		(b"UFID", b"owner\x00id"),
	] {
		body.extend_from_slice(id);
		body.extend((frame.len() as u32).to_be_bytes());
		body.extend([0, 0]);
		body.extend_from_slice(frame);
	}

	let mut tag = b"ID3\x03\x00\x00".to_vec();
	tag.extend(synchsafe(body.len() as u32));
	tag.extend(body);
	tag
}

proptest! {
	#[test_log::test]
	fn mutated_tags(mutations in mutations()) {
		no_panic(mutate(&seed_tag(), &mutations));
	}

	#[test_log::test]
	fn any_major_and_flags(major in 2..=4_u8, flags in any::<u8>(), mutations in mutations()) {
		let mut tag = seed_tag();
		tag[3] = major;
		tag[5] = flags;
		no_panic(mutate(&tag, &mutations));
	}

	#[test_log::test]
	fn arbitrary_tag_body(
		major in 2..=4_u8,
		flags in any::<u8>(),
		body in prop::collection::vec(any::<u8>(), 0..512),
	) {
		let mut tag = vec![b'I', b'D', b'3', major, 0, flags];
		tag.extend(synchsafe(body.len() as u32));
		tag.extend(body);
		no_panic(tag);
	}

	#[test_log::test]
	fn declared_sizes_past_the_end(size in 0..1_u32 << 28, frame_size in any::<u32>()) {
		let mut tag = b"ID3\x03\x00\x00".to_vec();
		tag.extend(synchsafe(size));
		tag.extend_from_slice(b"TIT2");
		tag.extend(frame_size.to_be_bytes());
		tag.extend([0, 0, 0]);
		no_panic(tag);
	}

	#[test_log::test]
	fn mutated_cue_sheets(mutations in mutations()) {
		let seed = b"FILE \"a.wav\" WAVE\n  TRACK 01 AUDIO\n    TITLE \"x\"\n    INDEX 01 00:00:00\n";
		no_panic(mutate(seed, &mutations));
	}
}
