//! Command-line argument parsing.

use thiserror::Error;

/// Options for a board run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Available width in pixels
    pub width: u32,
    /// Number of pages to load
    pub pages: u32,
    /// Location fragment to resolve channels from (e.g. `#pics+aww`)
    pub location: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            pages: 1,
            location: None,
        }
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Load pages and print the layout (default)
    Run(RunOptions),
}

/// Errors from argument parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: String },

    #[error("{flag} expects a number, got {value:?}")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    Unknown(String),
}

pub const USAGE: &str = "\
usage: imgboard [--width N] [--pages N] [--channels a+b] [--version] [--help]

Loads pages of the feed, lays the accepted images out in columns and prints
the resulting columns and generated CSS. Set RUST_LOG=debug for per-image logs.";

/// Parse command-line arguments and return the command to execute.
///
/// # Examples
///
/// ```
/// use imgboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["imgboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--width" | "-w" => options.width = number(&arg, args.next())?,
            "--pages" | "-p" => options.pages = number(&arg, args.next())?,
            "--channels" | "-c" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue {
                    flag: arg.clone(),
                })?;
                options.location = Some(format!("#{}", value.trim_start_matches('#')));
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}

fn number(flag: &str, value: Option<String>) -> Result<u32, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}
