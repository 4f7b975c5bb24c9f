use cuetag::error::Id3v2ErrorKind;
use cuetag::id3::v2::util::synchsafe::{SizeEncoding, UnsynchronizedStream};

use std::io::Read;

use proptest::prelude::*;

/// Insert a `0x00` after every `0xFF`
fn unsynchronise(data: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(data.len());
	for byte in data {
		out.push(*byte);
		if *byte == 0xFF {
			out.push(0);
		}
	}

	out
}

fn resynchronise(data: &[u8]) -> Vec<u8> {
	let mut out = Vec::new();
	UnsynchronizedStream::new(data)
		.read_to_end(&mut out)
		.unwrap();
	out
}

proptest! {
	#[test_log::test]
	fn synchsafe_round_trip(n in 0..1_u32 << 28) {
		let raw = [
			(n >> 21) as u8 & 0x7F,
			(n >> 14) as u8 & 0x7F,
			(n >> 7) as u8 & 0x7F,
			n as u8 & 0x7F,
		];
		prop_assert_eq!(SizeEncoding::Synchsafe.decode(&raw).unwrap(), n);
	}

	#[test_log::test]
	fn synchsafe_high_bit_is_malformed(mut raw in any::<[u8; 4]>(), position in 0..4_usize) {
		raw[position] |= 0x80;

		let err = SizeEncoding::Synchsafe.decode(&raw).unwrap_err();
		prop_assert_eq!(err.id3v2_kind(), Some(&Id3v2ErrorKind::MalformedSize));
	}

	#[test_log::test]
	fn unsynchronisation_collapses_stuffing(data in prop::collection::vec(any::<u8>(), 0..1024)) {
		prop_assert_eq!(resynchronise(&unsynchronise(&data)), data);
	}

	#[test_log::test]
	fn lone_trailing_ff_is_kept(mut data in prop::collection::vec(any::<u8>(), 0..256)) {
		let mut stuffed = unsynchronise(&data);
		stuffed.push(0xFF);
		data.push(0xFF);

		prop_assert_eq!(resynchronise(&stuffed), data);
	}

	#[test_log::test]
	fn stuffing_larger_than_the_read_buffer(len in 8 * 1024..20 * 1024_usize) {
		let data = vec![0xFF; len];
		prop_assert_eq!(resynchronise(&unsynchronise(&data)), data);
	}
}
