//! Erros do cliente NER

use std::io;
use std::string::FromUtf8Error;
use std::time::Duration;

use ner_core::{ConfigError, ParseError};

/// Tipo de resultado do cliente
pub type Result<T> = std::result::Result<T, Error>;

/// Erros de configuração, transporte e parsing
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Connection to {addr} failed: {source}")]
    Connection {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}
