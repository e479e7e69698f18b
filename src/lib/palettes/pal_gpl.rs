use std::sync::LazyLock;

use regex::bytes::Regex;

// GIMP palette lines look like "R G B Name", e.g. "0 0 0 Index0".
// Names may contain spaces and any other bytes, only trailing whitespace is dropped.
// Whitespace is ASCII only and excludes \v.
static GPL_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\t\n\f\r ]*(?P<r>[0-9]+)[\t\n\f\r ]+(?P<g>[0-9]+)[\t\n\f\r ]+(?P<b>[0-9]+)[\t\n\f\r ]+(?P<name>(?-u:.)+?)[\t\n\f\r ]*$").unwrap()
});

/// The raw fields of a color line, borrowed from the line they were found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GplLine<'a> {
	pub red: &'a str,
	pub green: &'a str,
	pub blue: &'a str,
	/// Not necessarily UTF-8, palettes in the wild are often Latin-1.
	pub name: &'a [u8],
}

/// Splits a palette line into its color and name fields.
/// Lines that aren't color lines (the magic header, comments, blank lines, …) return [None].
pub fn parse_gpl_line(line: &[u8]) -> Option<GplLine<'_>> {
	let groups = GPL_LINE.captures(line)?;

	// the channel groups only ever contain ASCII digits
	let digits = |group: &str| groups.name(group).and_then(|m| std::str::from_utf8(m.as_bytes()).ok());

	Some(GplLine {
		red: digits("r")?,
		green: digits("g")?,
		blue: digits("b")?,
		name: groups.name("name")?.as_bytes(),
	})
}

/// Removes a trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
	let Some(line) = line.strip_suffix(b"\n") else {
		return line;
	};
	line.strip_suffix(b"\r").unwrap_or(line)
}
