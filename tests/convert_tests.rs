use std::fs;
use std::io::{BufReader, ErrorKind, Read};
use std::path::PathBuf;

use gpl2asm::palettes::convert::{convert_palette, convert_palette_file};
use gpl2asm::palettes::palette::{Channel, ChannelError, PaletteError};

fn test_palette(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/palettes/{name}"))
}

fn convert_str(input: &str) -> (Result<usize, PaletteError>, String) {
	let mut out: Vec<u8> = Vec::new();
	let result = convert_palette(input.as_bytes(), &mut out, false);
	(result, String::from_utf8(out).unwrap())
}

#[test]
fn convert_first_and_second_row() {
	let (result, out) = convert_str("GIMP Palette\n0 0 0 Index0\n255 128 64 Some Color\n");

	assert_eq!(result.unwrap(), 2);
	assert_eq!(out, "palette LABEL BYTE\n  DB 00,00,00 ; Index0\n  DB 63,32,16 ; Some Color\n");
}

#[test]
fn convert_skips_non_color_lines() {
	let input = "GIMP Palette\nName: Test\nColumns: 0\n#\n\n# comment\n4 8 12 First\n\n16 20 24 Second\n";
	let (result, out) = convert_str(input);

	// the header only goes in front of the first converted row
	assert_eq!(result.unwrap(), 2);
	assert_eq!(out, "palette LABEL BYTE\n  DB 01,02,03 ; First\n  DB 04,05,06 ; Second\n");
}

#[test]
fn convert_last_line_without_newline() {
	let (result, out) = convert_str("0 0 0 A\r\n4 4 4 B");

	assert_eq!(result.unwrap(), 2);
	assert_eq!(out, "palette LABEL BYTE\n  DB 00,00,00 ; A\n  DB 01,01,01 ; B\n");
}

#[test]
fn convert_empty() {
	let (result, out) = convert_str("");
	assert_eq!(result.unwrap(), 0);
	assert!(out.is_empty());

	let (result, out) = convert_str("GIMP Palette\nName: Nothing\n#\n");
	assert_eq!(result.unwrap(), 0);
	assert!(out.is_empty());
}

#[test]
fn convert_stops_at_out_of_range() {
	let (result, out) = convert_str("GIMP Palette\n0 0 0 A\n256 0 0 B\n1 1 1 C\n");

	match result.unwrap_err() {
		PaletteError::ConvertError { line, source } => {
			// line numbers count every input line, not just the color lines
			assert_eq!(line, 3);
			assert_eq!(source, ChannelError::RangeError { channel: Channel::Red, value: 256, min: 0, max: 255 });
		}
		e => panic!("unexpected error: {e:?}"),
	}

	assert_eq!(out, "palette LABEL BYTE\n  DB 00,00,00 ; A\n");
}

#[test]
fn convert_stops_at_bad_number() {
	let (result, out) = convert_str("99999999999999999999 0 0 Big\n0 0 0 A\n");

	let err = result.unwrap_err();
	assert_eq!(err.to_string(), "Error converting color on line 1: invalid red value '99999999999999999999'");
	assert!(out.is_empty());
}

#[test]
fn convert_non_utf8_lines() {
	let mut out: Vec<u8> = Vec::new();
	let input: &[u8] = b"GIMP Palette\n# caf\xe9 palette\n0 0 0 Black\n255 0 0 Gr\xfcn\n";

	let rows = convert_palette(input, &mut out, false).unwrap();

	assert_eq!(rows, 2);
	assert_eq!(out, b"palette LABEL BYTE\n  DB 00,00,00 ; Black\n  DB 63,00,00 ; Gr\xfcn\n");
}

struct BrokenReader;

impl Read for BrokenReader {
	fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
		Err(std::io::Error::other("device went away"))
	}
}

#[test]
fn convert_read_error() {
	let mut out: Vec<u8> = Vec::new();
	let input: &[u8] = b"0 0 0 A\n";
	let reader = BufReader::new(input.chain(BrokenReader));

	match convert_palette(reader, &mut out, false).unwrap_err() {
		PaletteError::ReadError { line, source } => {
			assert_eq!(line, 2);
			assert_eq!(source.to_string(), "device went away");
		}
		e => panic!("unexpected error: {e:?}"),
	}

	assert_eq!(out, b"palette LABEL BYTE\n  DB 00,00,00 ; A\n");
}

#[test]
fn convert_file() {
	let dir = tempfile::tempdir().unwrap();
	let dst = dir.path().join("pal.inc");

	let rows = convert_palette_file(test_palette("palette.gpl"), &dst, false).unwrap();
	assert_eq!(rows, 8);

	let expected = fs::read_to_string(test_palette("palette.inc")).unwrap();
	assert_eq!(fs::read_to_string(&dst).unwrap(), expected);
}

#[test]
fn convert_file_truncates_destination() {
	let dir = tempfile::tempdir().unwrap();
	let dst = dir.path().join("pal.inc");
	fs::write(&dst, "this will be replaced\n".repeat(100)).unwrap();

	let rows = convert_palette_file(test_palette("palette_empty.gpl"), &dst, false).unwrap();
	assert_eq!(rows, 0);
	assert_eq!(fs::read_to_string(&dst).unwrap(), "");
}

#[test]
fn convert_file_keeps_partial_output() {
	let dir = tempfile::tempdir().unwrap();
	let dst = dir.path().join("pal.inc");

	let err = convert_palette_file(test_palette("palette_broken_range.gpl"), &dst, false).unwrap_err();
	assert_eq!(err.to_string(), "Error converting color on line 6: green value 300 out of range [0-255]");

	assert_eq!(
		fs::read_to_string(&dst).unwrap(),
		"palette LABEL BYTE\n  DB 00,00,00 ; Black\n  DB 63,63,63 ; White\n"
	);
}

#[test]
fn convert_file_missing_source() {
	let dir = tempfile::tempdir().unwrap();
	let src = dir.path().join("missing.gpl");
	let dst = dir.path().join("pal.inc");

	match convert_palette_file(&src, &dst, false).unwrap_err() {
		PaletteError::OpenError { path, source } => {
			assert_eq!(path, src);
			assert_eq!(source.kind(), ErrorKind::NotFound);
		}
		e => panic!("unexpected error: {e:?}"),
	}

	assert!(!dst.exists(), "destination must not be created when the source can't be opened");
}

#[test]
fn convert_file_bad_destination() {
	let dir = tempfile::tempdir().unwrap();
	let dst = dir.path().join("no_such_dir").join("pal.inc");

	match convert_palette_file(test_palette("palette.gpl"), &dst, false).unwrap_err() {
		PaletteError::CreateError { path, .. } => assert_eq!(path, dst),
		e => panic!("unexpected error: {e:?}"),
	}
}
