use std::path::PathBuf;

use clap::{ArgAction, Parser};

use fat16_reader::report::STATUS_LEGEND;

/// Print the main info from a file with a FAT16 file system.
#[derive(Parser, Debug)]
#[command(name = "fat16-reader", version = env!("APP_VERSION"), about, after_help = STATUS_LEGEND)]
pub struct ReaderArgs {
    /// File with a FAT16 file system
    pub fs_file: PathBuf,

    /// Print a JSON document instead of the text listing
    #[arg(long)]
    pub json: bool,

    /// Also show creation and last access dates
    #[arg(long)]
    pub all_dates: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
