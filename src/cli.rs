//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Download LINE sticker packs into Signal-ready local archives.
///
/// line2signal resolves a sticker shop URL or numeric pack id, scrapes the
/// pack metadata from the product page, and downloads every sticker asset
/// for later conversion to Signal stickers.
#[derive(Parser, Debug)]
#[command(name = "line2signal")]
#[command(author, version, about)]
pub struct Args {
    /// Sticker shop URL or numeric sticker set id
    pub url: String,

    /// Signal username (overrides SIGNAL_USERNAME)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Ask for the Signal password on stdin instead of reading SIGNAL_PASSWORD
    #[arg(short, long)]
    pub password: bool,

    /// Root directory for downloaded sticker packs
    #[arg(short, long, default_value = "./stickers")]
    pub output: PathBuf,

    /// Clear an existing pack directory without asking
    #[arg(short = 'y', long)]
    pub overwrite: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
