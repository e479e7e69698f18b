use anyhow::Result;

use gpl2asm::palettes::convert::convert_palette_file;

use crate::commands::Cli;

pub(crate) fn palette_convert(cli: &Cli) -> Result<()> {
	let rows = convert_palette_file(&cli.src, &cli.dst, cli.debug)?;

	if cli.debug {
		eprintln!("wrote {rows} rows");
	}

	println!("Palette conversion complete, saved in file {}.", cli.dst.display());
	Ok(())
}
