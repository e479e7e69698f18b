use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

use crate::palettes::COLOR_DIVISOR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
	Red,
	Green,
	Blue,
}

impl Display for Channel {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Channel::Red => write!(f, "red"),
			Channel::Green => write!(f, "green"),
			Channel::Blue => write!(f, "blue"),
		}
	}
}

/// A single validated line of a GIMP palette. Only lives as long as it takes to write it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
	pub name: Vec<u8>,
}

/// A color with 6 bits per channel, as used by VGA DAC registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantizedColor {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

/// Drops the two least significant bits of an 8-bit channel value.
pub fn quantize(v: u8) -> u8 {
	v / COLOR_DIVISOR
}

impl From<&PaletteEntry> for QuantizedColor {
	fn from(e: &PaletteEntry) -> Self {
		Self {
			r: quantize(e.red),
			g: quantize(e.green),
			b: quantize(e.blue),
		}
	}
}

impl From<[u8; 3]> for QuantizedColor {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: quantize(v[0]),
			g: quantize(v[1]),
			b: quantize(v[2]),
		}
	}
}

impl Display for QuantizedColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02},{:02},{:02}", self.r, self.g, self.b)
	}
}

/// Reasons a single channel value can be rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelError {
	ParseError { channel: Channel, text: String },
	RangeError { channel: Channel, value: i64, min: i64, max: i64 },
}

impl Display for ChannelError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ChannelError::ParseError { channel, text } => write!(f, "invalid {channel} value '{text}'"),
			ChannelError::RangeError { channel, value, min, max } => write!(f, "{channel} value {value} out of range [{min}-{max}]"),
		}
	}
}

impl std::error::Error for ChannelError {}

#[derive(Debug)]
pub enum PaletteError {
	OpenError { path: PathBuf, source: io::Error },
	CreateError { path: PathBuf, source: io::Error },
	ReadError { line: usize, source: io::Error },
	WriteError(io::Error),
	ConvertError { line: usize, source: ChannelError },
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::OpenError { path, source } => write!(f, "Error opening source file {}: {source}", path.display()),
			PaletteError::CreateError { path, source } => write!(f, "Error creating destination file {}: {source}", path.display()),
			PaletteError::ReadError { line, source } => write!(f, "Error reading line {line}: {source}"),
			PaletteError::WriteError(e) => write!(f, "Error writing output: {e}"),
			PaletteError::ConvertError { line, source } => write!(f, "Error converting color on line {line}: {source}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::OpenError { source, .. } => Some(source),
			PaletteError::CreateError { source, .. } => Some(source),
			PaletteError::ReadError { source, .. } => Some(source),
			PaletteError::WriteError(e) => Some(e),
			PaletteError::ConvertError { source, .. } => Some(source),
		}
	}
}

impl From<io::Error> for PaletteError {
	fn from(e: io::Error) -> Self {
		PaletteError::WriteError(e)
	}
}
