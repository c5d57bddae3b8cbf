//! Command-line parsing.
//!
//! ```text
//! spotreader [--wpm N] [--step N] [--eos-delay MS] <FILE>
//! spotreader [--wpm N] [--step N] [--eos-delay MS] --demo [WORDS...]
//! ```

use crate::engine::config::ReaderConfig;
use crate::engine::error::{ReaderError, Result};
use crate::input::text::words_from_file;
use crate::reading::WordCycle;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: spotreader [OPTIONS] <FILE>
       spotreader [OPTIONS] --demo [WORDS...]

Options:
  --wpm <N>         Initial words per minute (default 200)
  --step <N>        WPM change per button press (default 10)
  --eos-delay <MS>  Pause after a word ending in a period
  --demo            Cycle WORDS (or a built-in sentence) forever
  -h, --help        Print this help

Keys: +/- or Up/Down change speed, q or Esc quits.";

/// Where tokens come from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceArg {
    File(PathBuf),
    /// Endless cycle; an empty list selects the built-in sentence
    Demo(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    pub source: SourceArg,
    pub reader: ReaderConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Launch {
    Run(LaunchOptions),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Launch>
where
    I: IntoIterator<Item = String>,
{
    let mut reader = ReaderConfig::default();
    let mut demo = false;
    let mut positional = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Launch::Help),
            "--demo" => demo = true,
            "--wpm" => reader.wpm = parse_positive("--wpm", args.next())?,
            "--step" => reader.wpm_step = parse_positive("--step", args.next())?,
            "--eos-delay" => {
                reader.end_of_sentence_delay_ms = Some(parse_positive("--eos-delay", args.next())?)
            }
            flag if flag.starts_with("--") => {
                return Err(ReaderError::InvalidInput(format!("unknown option {}", flag)))
            }
            _ => positional.push(arg),
        }
    }

    let source = if demo {
        SourceArg::Demo(positional)
    } else {
        match positional.as_slice() {
            [path] => SourceArg::File(PathBuf::from(path)),
            [] => {
                return Err(ReaderError::InvalidInput(
                    "missing text file (or pass --demo)".to_string(),
                ))
            }
            _ => {
                return Err(ReaderError::InvalidInput(
                    "expected exactly one text file".to_string(),
                ))
            }
        }
    };

    reader.validate()?;
    Ok(Launch::Run(LaunchOptions { source, reader }))
}

fn parse_positive<T>(flag: &str, value: Option<String>) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let value =
        value.ok_or_else(|| ReaderError::InvalidInput(format!("{} needs a value", flag)))?;
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(ReaderError::InvalidInput(format!(
            "{} must be a positive integer, got {:?}",
            flag, value
        ))),
    }
}

/// Opens the token source named on the command line.
pub fn open_source(source: &SourceArg) -> Result<Box<dyn Iterator<Item = String>>> {
    match source {
        SourceArg::File(path) => Ok(Box::new(words_from_file(path)?.into_iter())),
        SourceArg::Demo(words) if words.is_empty() => Ok(Box::new(WordCycle::demo())),
        SourceArg::Demo(words) => Ok(Box::new(WordCycle::new(words.iter().cloned())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_options(list: &[&str]) -> LaunchOptions {
        match parse_args(args(list)).unwrap() {
            Launch::Run(options) => options,
            Launch::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_file_with_defaults() {
        let options = run_options(&["book.txt"]);
        assert_eq!(options.source, SourceArg::File(PathBuf::from("book.txt")));
        assert_eq!(options.reader, ReaderConfig::default());
    }

    #[test]
    fn test_all_options() {
        let options = run_options(&["--wpm", "150", "--step", "25", "--eos-delay", "1000", "a.txt"]);
        assert_eq!(options.reader.wpm, 150);
        assert_eq!(options.reader.wpm_step, 25);
        assert_eq!(options.reader.end_of_sentence_delay_ms, Some(1000));
    }

    #[test]
    fn test_demo_words() {
        let options = run_options(&["--demo", "alpha", "beta"]);
        assert_eq!(
            options.source,
            SourceArg::Demo(vec!["alpha".to_string(), "beta".to_string()])
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(args(&["--help"])).unwrap(), Launch::Help);
        assert_eq!(parse_args(args(&["x.txt", "-h"])).unwrap(), Launch::Help);
    }

    #[test]
    fn test_non_numeric_wpm_rejected() {
        let result = parse_args(args(&["--wpm", "fast", "a.txt"]));
        assert!(matches!(result, Err(ReaderError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_and_negative_wpm_rejected() {
        assert!(parse_args(args(&["--wpm", "0", "a.txt"])).is_err());
        assert!(parse_args(args(&["--wpm", "-5", "a.txt"])).is_err());
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(parse_args(args(&["a.txt", "--step"])).is_err());
    }

    #[test]
    fn test_missing_source_rejected() {
        assert!(matches!(
            parse_args(args(&[])),
            Err(ReaderError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(parse_args(args(&["--speed", "3", "a.txt"])).is_err());
    }

    #[test]
    fn test_open_demo_source_is_endless() {
        let mut source = open_source(&SourceArg::Demo(vec![])).unwrap();
        assert_eq!(source.next().as_deref(), Some("Hello"));
        assert_eq!(source.nth(100).map(|w| w.is_empty()), Some(false));
    }

    #[test]
    fn test_open_missing_file_is_invalid_input() {
        let result = open_source(&SourceArg::File(PathBuf::from("no/such/file.txt")));
        assert!(matches!(result, Err(ReaderError::InvalidInput(_))));
    }

    #[test]
    fn test_open_blank_demo_words_is_invalid_input() {
        let result = open_source(&SourceArg::Demo(vec![" ".to_string()]));
        assert!(matches!(result, Err(ReaderError::InvalidInput(_))));
    }
}
