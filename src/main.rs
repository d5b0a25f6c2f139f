use anyhow::Result;
use clap::Parser;
use sitelog::{config, CallSite, Level, Logger, LoggerConfig};
use std::io;
use std::path::PathBuf;

/// Print a message with a `sitelog:` call-site, optionally appending it to the log file
#[derive(Parser, Debug)]
#[command(name = "sitelog")]
#[command(version)]
struct Cli {
    /// Write to stderr with the `Error - ` tag instead of stdout
    #[arg(short, long)]
    error: bool,

    /// Also append the line to the log file
    #[arg(short, long)]
    persist: bool,

    /// Log file to append to (overrides SITELOG_FILE)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Message words; everything after the first word is taken literally
    #[arg(value_name = "MESSAGE", required = true, num_args = 1.., trailing_var_arg = true)]
    message: Vec<String>,
}

impl Cli {
    fn level(&self) -> Level {
        if self.error {
            Level::Error
        } else {
            Level::Debug
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.file {
        Some(path) => LoggerConfig::new(path),
        None => config::global().clone(),
    };

    // The shell script is the real caller; there is no meaningful Rust location.
    let site = CallSite::new("sitelog", "");
    let mut logger = Logger::with_sinks(&cfg, io::stdout(), io::stderr());
    logger.emit(cli.level(), &site, &cli.message.join(" "), cli.persist);
    Ok(())
}
