use neo_crypto::secp256r1::KeyError;
use neo_type::ToAddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("address error: {0}")]
    Address(#[from] ToAddressError),

    #[error("key file: missing field '{0}'")]
    MissingField(&'static str),

    #[error("key file: field '{field}' does not match the private key")]
    Mismatch { field: &'static str },

    /// `entry` counts assignments from 1; blank lines and comments are not counted.
    /// The offending text is left out, it may hold key material.
    #[error("key file: malformed entry {entry}")]
    MalformedEntry { entry: usize },

    #[error("key file I/O: {0}")]
    Io(#[from] std::io::Error),
}
