//! Common error wrapper.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UdpingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid invocation parameters or an unresolvable destination.
    /// Always raised before the first probe is sent.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Handy alias.
pub type Result<T> = std::result::Result<T, UdpingError>;
