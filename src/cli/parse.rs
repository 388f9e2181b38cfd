use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--save" => flags.save = true,
            flag @ ("-l" | "--length") => {
                i += 1;
                flags.length = Some(number(args, i, flag)?);
            }
            flag @ ("-n" | "--number") => {
                i += 1;
                flags.number = Some(number(args, i, flag)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number(args: &[String], i: usize, flag: &str) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
