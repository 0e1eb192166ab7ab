use anyhow::{Context, Result};
use clap::Parser;

use txconvert::cli::run_convert;
use txconvert::config::ConverterPaths;

#[derive(Parser)]
#[command(
    name = "txconvert",
    version,
    about = "Convert a personal finance CSV export into an importable spreadsheet",
    long_about = "Reads the transaction export stored as `original` in the current \
                  directory and writes the converted rows to `result.csv` next to it."
)]
struct Cli {
    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().filter_or("TXCONVERT_LOG", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let paths = ConverterPaths::new()?;
    let summary = run_convert(&paths).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            paths.input_file().display(),
            paths.output_file().display()
        )
    })?;

    println!("{}", summary);

    Ok(())
}
