use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RewriteError {
    /// Read and decode failures both mean nothing was touched on disk.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;
