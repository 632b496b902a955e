use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use linecmp::{build_options, compare_files, Args};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let opts = build_options(&args);

    let result = compare_files(&args.file1, &args.file2, &opts)
        .context("An error occurred during file comparison")?;

    if result.equal {
        info!("Files are identical.");
    } else {
        info!("Differences found between files:");
        for entry in &result.diffs {
            info!("{entry}");
        }
        info!("Files are different.");
    }

    Ok(())
}
