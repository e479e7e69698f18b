use std::fs;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use humansize::DECIMAL;

use crate::cmd_convert::palette_convert;
use crate::commands::{Cli, GIT_HASH, GIT_VERSION};

mod cmd_convert;
mod commands;

fn main() -> ExitCode {
	let cli = Cli::parse();

	println!("{} version: {GIT_VERSION}, git commit: {GIT_HASH}", "gpl2asm".bold());

	match palette_convert(&cli) {
		Ok(_) => {
			match fs::metadata(&cli.dst) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			println!("{}", e.to_string().red());
			ExitCode::FAILURE
		}
	}
}
