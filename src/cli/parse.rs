use thiserror::Error;

use super::CliFlags;
use crate::settings::MAX_PASSWORDS;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("{flag} out of range: {value}")]
    OutOfRange { flag: String, value: String },
    #[error("--board and --random cannot be combined")]
    ConflictingCopy,
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-b" | "--board" => flags.board = true,
            "-r" | "--random" => flags.random = true,
            "-p" | "--plain" => flags.plain = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-e" | "--entropy" => {
                let value = value_for(args, &mut i, arg)?;
                // Range is checked by the generator so that 0 and negatives
                // surface as invalid entropy requests.
                flags.entropy = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.to_string()))?,
                );
            }
            "-n" | "--number" => {
                let value = value_for(args, &mut i, arg)?;
                let n: usize = value
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(value.to_string()))?;
                if n == 0 || n > MAX_PASSWORDS {
                    return Err(ParseError::OutOfRange {
                        flag: arg.to_string(),
                        value: value.to_string(),
                    });
                }
                flags.number = Some(n);
            }
            "--symbols" => {
                flags.symbols = Some(value_for(args, &mut i, arg)?.to_string());
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.board && flags.random {
        return Err(ParseError::ConflictingCopy);
    }

    Ok(flags)
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}
