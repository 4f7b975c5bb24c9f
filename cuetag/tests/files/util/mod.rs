use std::fs::File;
use std::io::{Seek as _, Write as _};

/// Create a new temporary file holding `content`
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}

/// Encode `n` as a 4 byte synchsafe integer
pub fn synchsafe(n: u32) -> [u8; 4] {
	assert!(n < 1 << 28);
	[
		(n >> 21) as u8 & 0x7F,
		(n >> 14) as u8 & 0x7F,
		(n >> 7) as u8 & 0x7F,
		n as u8 & 0x7F,
	]
}

/// Build an ID3v2.3 frame
pub fn v3_frame(id: &str, flags: u16, body: &[u8]) -> Vec<u8> {
	let mut frame = Vec::with_capacity(body.len() + 10);
	frame.extend_from_slice(id.as_bytes());
	frame.extend((body.len() as u32).to_be_bytes());
	frame.extend(flags.to_be_bytes());
	frame.extend_from_slice(body);
	frame
}

/// Build an ID3v2.4 frame, with a synchsafe size
pub fn v4_frame(id: &str, flags: u16, body: &[u8]) -> Vec<u8> {
	let mut frame = Vec::with_capacity(body.len() + 10);
	frame.extend_from_slice(id.as_bytes());
	frame.extend(synchsafe(body.len() as u32));
	frame.extend(flags.to_be_bytes());
	frame.extend_from_slice(body);
	frame
}

/// Build an ID3v2.2 frame
pub fn v2_frame(id: &str, body: &[u8]) -> Vec<u8> {
	let mut frame = Vec::with_capacity(body.len() + 6);
	frame.extend_from_slice(id.as_bytes());
	frame.extend(&(body.len() as u32).to_be_bytes()[1..]);
	frame.extend_from_slice(body);
	frame
}

/// Wrap `body` in an ID3v2 tag header
pub fn tag(major: u8, flags: u8, body: &[u8]) -> Vec<u8> {
	let mut tag = Vec::with_capacity(body.len() + 10);
	tag.extend_from_slice(b"ID3");
	tag.push(major);
	tag.push(0);
	tag.push(flags);
	tag.extend(synchsafe(body.len() as u32));
	tag.extend_from_slice(body);
	tag
}

/// Build a 128 byte ID3v1 tag
pub fn id3v1(title: &str, artist: &str, year: &str, track: Option<u8>, genre: u8) -> Vec<u8> {
	let mut tag = vec![0; 128];
	tag[..3].copy_from_slice(b"TAG");
	tag[3..3 + title.len()].copy_from_slice(title.as_bytes());
	tag[33..33 + artist.len()].copy_from_slice(artist.as_bytes());
	tag[93..93 + year.len()].copy_from_slice(year.as_bytes());
	if let Some(track) = track {
		tag[126] = track;
	}
	tag[127] = genre;
	tag
}

/// A few bytes standing in for audio data
pub const AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00];
