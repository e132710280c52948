use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The RSA primitive refused the requested size or ran out of entropy.
    #[error("failed to generate RSA key: {0}")]
    KeyGeneration(#[source] rsa::Error),
    #[error("failed to encode key: {0}")]
    Encoding(String),
    #[error("failed to decode key: {0}")]
    Decoding(String),
    #[error("unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("key file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read key file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn read(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound { path },
            _ => Error::Io { path, source },
        }
    }
}
