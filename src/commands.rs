use clap::Parser;
use const_format::formatcp;
use std::path::PathBuf;

pub(crate) const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
pub(crate) const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Converts GIMP palettes into 6-bit assembly data tables")]
pub(crate) struct Cli {
	#[arg(long, help = "Path to the GIMP palette to convert.", default_value = "pal.gpl")]
	pub src: PathBuf,
	#[arg(long, help = "Path to the output .inc file.", default_value = "pal.inc")]
	pub dst: PathBuf,

	#[arg(long, help = "Prints every converted row to stderr.")]
	pub debug: bool,
}
