use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::palettes::pal_asm::write_asm_row;
use crate::palettes::pal_gpl::{parse_gpl_line, trim_line_ending, GplLine};
use crate::palettes::palette::{Channel, ChannelError, PaletteEntry, PaletteError, QuantizedColor};
use crate::palettes::{MAX_RGB, MIN_RGB};

fn parse_channel(channel: Channel, text: &str) -> Result<i64, ChannelError> {
	text.parse::<i64>()
		.map_err(|_| ChannelError::ParseError { channel, text: text.to_string() })
}

fn check_channel(channel: Channel, value: i64) -> Result<u8, ChannelError> {
	if !(MIN_RGB..=MAX_RGB).contains(&value) {
		return Err(ChannelError::RangeError { channel, value, min: MIN_RGB, max: MAX_RGB });
	}

	Ok(value as u8)
}

/// Parses and validates the three channel strings, red first.
/// All three are parsed before any of them is range checked.
fn parse_rgb(red: &str, green: &str, blue: &str) -> Result<[u8; 3], ChannelError> {
	let r = parse_channel(Channel::Red, red)?;
	let g = parse_channel(Channel::Green, green)?;
	let b = parse_channel(Channel::Blue, blue)?;

	Ok([
		check_channel(Channel::Red, r)?,
		check_channel(Channel::Green, g)?,
		check_channel(Channel::Blue, b)?,
	])
}

/// Converts textual 8-bit channel values (0-255) into a 6-bit color (0-63).
pub fn convert_to_6bits(red: &str, green: &str, blue: &str) -> Result<QuantizedColor, ChannelError> {
	parse_rgb(red, green, blue).map(QuantizedColor::from)
}

impl TryFrom<GplLine<'_>> for PaletteEntry {
	type Error = ChannelError;

	fn try_from(line: GplLine<'_>) -> Result<Self, Self::Error> {
		let [red, green, blue] = parse_rgb(line.red, line.green, line.blue)?;
		Ok(Self {
			red,
			green,
			blue,
			name: line.name.to_vec(),
		})
	}
}

/// Reads a GIMP palette from `reader` and writes it to `writer` as a table of 6-bit `DB` rows.
/// Stops at the first line that can't be converted. Returns the number of rows written.
pub fn convert_palette<R: BufRead, W: Write>(mut reader: R, writer: &mut W, debug: bool) -> Result<usize, PaletteError> {
	let mut row = 0;
	let mut line_num = 0;
	let mut buf: Vec<u8> = Vec::new();

	loop {
		buf.clear();
		let len = reader.read_until(b'\n', &mut buf)
			.map_err(|source| PaletteError::ReadError { line: line_num + 1, source })?;
		if len == 0 {
			break;
		}
		line_num += 1;

		let Some(fields) = parse_gpl_line(trim_line_ending(&buf)) else {
			continue;
		};

		let entry = PaletteEntry::try_from(fields)
			.map_err(|source| PaletteError::ConvertError { line: line_num, source })?;
		let color = QuantizedColor::from(&entry);

		if debug {
			let name = String::from_utf8_lossy(&entry.name);
			eprintln!("line {line_num}: {} {} {} -> {color} ({name})", entry.red, entry.green, entry.blue);
		}

		write_asm_row(writer, row, color, &entry.name)?;
		row += 1;
	}

	writer.flush()?;
	Ok(row)
}

/// Converts the palette at `src` and saves the table to `dst`, replacing any existing file.
/// Rows written before an error are left in `dst`.
pub fn convert_palette_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q, debug: bool) -> Result<usize, PaletteError> {
	let src = src.as_ref();
	let dst = dst.as_ref();

	let src_file = File::open(src)
		.map_err(|source| PaletteError::OpenError { path: src.to_path_buf(), source })?;
	let dst_file = File::create(dst)
		.map_err(|source| PaletteError::CreateError { path: dst.to_path_buf(), source })?;

	let reader = BufReader::new(src_file);
	let mut writer = BufWriter::new(dst_file);
	convert_palette(reader, &mut writer, debug)
}
