use std::io::{self, Write};

use crate::palettes::palette::QuantizedColor;

/// Label declared in front of the first row of the table.
pub const PALETTE_LABEL: &str = "palette LABEL BYTE";

/// Writes one row of the `DB` table. Row 0 is preceded by the label declaration.
/// The name is copied byte for byte.
pub fn write_asm_row<W: Write>(writer: &mut W, row: usize, color: QuantizedColor, name: &[u8]) -> io::Result<()> {
	if row == 0 {
		writeln!(writer, "{PALETTE_LABEL}")?;
	}

	write!(writer, "  DB {color} ; ")?;
	writer.write_all(name)?;
	writeln!(writer)
}
