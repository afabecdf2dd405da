use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON array of listings to choose from
    #[arg(short = 'l', long, value_name = "FILE")]
    pub catalogue_file: PathBuf,
    /// JSON array of vehicles, read from stdin if omitted
    #[arg(short, long, value_name = "FILE")]
    pub request_file: Option<PathBuf>,
    /// Where to write the response body, stdout if omitted
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
