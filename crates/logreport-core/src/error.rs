use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read log file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown report: {0}")]
    UnknownReport(String),

    #[error("Report row has {found} columns, expected {expected}")]
    ReportShape { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
