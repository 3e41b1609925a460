//! Command-line front-ends.
//!
//! - [`run_batch`]: recompress files given on the command line, then exit
//! - [`run_interactive`]: read drops and commands from stdin

mod batch;
mod interactive;

use std::path::PathBuf;
use clap::Parser;
use crate::core::Quality;

pub use batch::{exit_code, run_batch};
pub use interactive::{Input, parse_line, run_interactive};

/// Recompress JPEG files next to the originals as `{name}-{quality}{ext}`.
///
/// With FILES, they are processed as one batch at the stored quality and the
/// program exits when the batch ends. Without FILES, paths are read from
/// stdin one per line; an empty line drops the collected paths as a batch.
/// Commands: `:quality N`, `:cancel`, `:wait`, `:status`, `:quit`.
#[derive(Debug, Parser)]
#[command(name = "jpeg-quality", version, about, long_about = None)]
pub struct Cli {
    /// JPEG files to recompress as one batch
    pub files: Vec<PathBuf>,

    /// Store a new quality (0-100) before doing anything else
    #[arg(short, long, value_name = "N")]
    pub quality: Option<Quality>,

    /// Settings file holding the last-used quality
    #[arg(long, env = "JPEG_QUALITY_SETTINGS", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Log every file as it is processed
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_quality() {
        let cli = Cli::try_parse_from(["jpeg-quality", "-q", "45", "a.jpg", "b.jpeg"]).unwrap();
        assert_eq!(cli.quality, Some(Quality::new(45).unwrap()));
        assert_eq!(cli.files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpeg")]);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_out_of_range_quality() {
        assert!(Cli::try_parse_from(["jpeg-quality", "--quality", "101"]).is_err());
    }

    #[test]
    fn no_files_means_interactive() {
        let cli = Cli::try_parse_from(["jpeg-quality", "--settings", "/tmp/s.json"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.settings, Some(PathBuf::from("/tmp/s.json")));
    }
}
