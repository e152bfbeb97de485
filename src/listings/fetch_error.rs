use std::error::Error;
use std::fmt;

/// The one failure kind the loader recognises: the listings could not be
/// fetched or could not be decoded.
#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Decode(String),
    Config(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Decode(msg) => write!(f, "JSON decode error: {msg}"),
            FetchError::Config(msg) => write!(f, "Client setup error: {msg}"),
        }
    }
}

impl Error for FetchError {}
