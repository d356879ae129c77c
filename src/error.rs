use std::path::PathBuf;

/// Errors from loading configuration and generating trees. The tree
/// algorithms themselves are total and never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file couldn't be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file isn't valid TOML or doesn't match [`Config`](crate::config::Config).
    #[error("failed to parse config file {}", path.display())]
    Parse {
        /// The file that was being parsed.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: toml::de::Error,
    },
    /// A range whose lower end lies above its upper end.
    #[error("invalid {what} range: {low} > {high}")]
    InvalidRange {
        /// Which range was wrong.
        what: &'static str,
        /// The lower end.
        low: i64,
        /// The upper end.
        high: i64,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
