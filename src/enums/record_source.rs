use std::fmt;
use std::path::PathBuf;
use crate::config::constants::STDIN_RECORD_ARG;

/// Where the contact record comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    File(PathBuf),
    Stdin,
    /// The `[record]` table of the loaded configuration.
    Config,
}

impl RecordSource {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Config,
            Some(STDIN_RECORD_ARG) => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file '{}'", path.display()),
            Self::Stdin => write!(f, "standard input"),
            Self::Config => write!(f, "the [record] table of the configuration"),
        }
    }
}
