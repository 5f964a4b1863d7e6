use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum GapFollowError {
    Disconnected,
    IoError(io::Error),
    ConfigError(toml::de::Error),
}

impl fmt::Display for GapFollowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GapFollowError::Disconnected => {
                write!(f, "The channel peer has disconnected.")
            }
            GapFollowError::IoError(err) => Display::fmt(&err, f),
            GapFollowError::ConfigError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for GapFollowError {}

impl From<io::Error> for GapFollowError {
    fn from(err: io::Error) -> Self {
        GapFollowError::IoError(err)
    }
}

impl From<toml::de::Error> for GapFollowError {
    fn from(err: toml::de::Error) -> Self {
        GapFollowError::ConfigError(err)
    }
}
