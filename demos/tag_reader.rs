#![allow(missing_docs)]

use cuetag::config::ParseOptions;
use cuetag::cue::CueSheet;
use cuetag::id3::v2::Id3v2Tag;
use cuetag::id3::{Id3Tag, read_all};

use structopt::StructOpt;

use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "tag_reader", about = "Print the ID3 tags of a file, or the tracks of a cue sheet")]
struct Opt {
	/// Don't decode attached pictures
	#[structopt(long)]
	no_pictures: bool,

	/// List every frame, rather than a summary
	#[structopt(short, long)]
	frames: bool,

	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn print_id3v2(tag: &Id3v2Tag, all_frames: bool) {
	println!("--- ID3v2 ({:?}) ---", tag.version());

	if all_frames {
		for frame in tag {
			println!(
				"{} ({:?}): {} bytes",
				frame.id(),
				frame.frame_type(),
				frame.size()
			);
		}

		return;
	}

	println!("Title: {}", tag.title().as_deref().unwrap_or("None"));
	println!("Artist: {}", tag.artist().as_deref().unwrap_or("None"));
	println!("Album: {}", tag.album().as_deref().unwrap_or("None"));
	println!("Genre: {}", tag.genre().as_deref().unwrap_or("None"));
	println!("Year: {}", tag.year().unwrap_or(0));
	println!("Track: {}", tag.track().unwrap_or(0));

	if let Some(comment) = tag.comment() {
		println!("Comment: {}", comment.content);
	}

	for picture in tag.pictures() {
		println!(
			"Picture: {:?}, {} bytes",
			picture.picture_type,
			picture.data.len()
		);
	}
}

fn print_cue_sheet(sheet: &CueSheet) {
	println!("--- Cue sheet ---");
	println!("Title: {}", sheet.title.as_deref().unwrap_or("None"));
	println!("Performer: {}", sheet.performer.as_deref().unwrap_or("None"));

	for track in sheet.tracks() {
		let start = track
			.start()
			.map_or_else(|| String::from("??:??:??"), |start| start.to_string());

		println!(
			"{:02}. [{}] {} - {} ({})",
			track.track.number,
			start,
			track.performer().unwrap_or("Unknown"),
			track.title().unwrap_or("Untitled"),
			track.file_name()
		);
	}
}

fn main() {
	let opt = Opt::from_args();

	let mut file = File::open(&opt.path).expect("ERROR: Bad path provided!");

	let is_cue_sheet = opt
		.path
		.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("cue"));
	if is_cue_sheet {
		let sheet = CueSheet::read_from(&mut file).expect("ERROR: Failed to read cue sheet!");
		print_cue_sheet(&sheet);
		return;
	}

	let tags = read_all(
		&mut file,
		ParseOptions::new().read_cover_art(!opt.no_pictures),
	)
	.expect("ERROR: Failed to read file!");

	if tags.is_empty() {
		println!("No tags found");
	}

	for tag in tags {
		match tag {
			Id3Tag::Id3v2(tag) => print_id3v2(&tag, opt.frames),
			Id3Tag::Id3v1(tag) => {
				println!("--- ID3v1 ({:?}) ---", tag.revision);
				println!("Title: {}", tag.title().as_deref().unwrap_or("None"));
				println!("Artist: {}", tag.artist().as_deref().unwrap_or("None"));
				println!("Album: {}", tag.album().as_deref().unwrap_or("None"));
				println!("Genre: {}", tag.genre_name().unwrap_or("None"));
			},
		}
	}
}
