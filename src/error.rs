use crate::hex::DecodeError;
use std::fmt::Display;

/// Error type for the application, encapsulating various error scenarios
#[derive(Debug)]
pub enum Error {
    ReadConfigFile(String, std::io::Error),
    ParseConfigFile(String, serde_yaml::Error),
    InvalidConfig(&'static str),
    ReadInput(std::io::Error),
    EmptyInput(),
    WriteOutput(std::io::Error),
    Decode(DecodeError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReadConfigFile(path, err) => {
                write!(f, "Failed to read config file '{path}': {err}")
            }
            Error::ParseConfigFile(path, err) => {
                write!(f, "Failed to parse config file '{path}': {err}")
            }
            Error::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {msg}")
            }
            Error::ReadInput(err) => {
                write!(f, "Failed to read input: {err}")
            }
            Error::EmptyInput() => {
                write!(f, "No input provided, pass a hex string or pipe it to stdin.")
            }
            Error::WriteOutput(err) => {
                write!(f, "Failed to write output: {err}")
            }
            Error::Decode(err) => {
                write!(f, "Failed to decode hex string: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadConfigFile(_, err) => Some(err),
            Error::ParseConfigFile(_, err) => Some(err),
            Error::ReadInput(err) | Error::WriteOutput(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::InvalidConfig(_) | Error::EmptyInput() => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

/// Join the error with all of its sources, separated by ": ".
/// Sources already contained in the message are skipped.
pub fn full_error_stack(mut e: &dyn std::error::Error) -> String {
    let mut s = format!("{e}");
    while let Some(src) = e.source() {
        let msg = format!("{src}");
        if !s.ends_with(&msg) {
            s.push_str(&format!(": {msg}"));
        }
        e = src;
    }
    s
}
