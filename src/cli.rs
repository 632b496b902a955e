use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the first file to compare
    pub file1: PathBuf,

    /// Path to the second file to compare
    pub file2: PathBuf,

    /// Ignore lines whose first non-blank character is '#'
    #[arg(short = 'c', long)]
    pub ignore_comments: bool,

    /// Ignore whitespace differences, including runs inside a line
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    pub ignore_comments: bool,
    pub ignore_whitespace: bool,
}

pub fn build_options(args: &Args) -> Options {
    Options {
        ignore_comments: args.ignore_comments,
        ignore_whitespace: args.ignore_whitespace,
    }
}
