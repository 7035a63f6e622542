//! Branca: authenticated and encrypted API tokens.
//!
//! A token is a 29 byte header (version, creation time and a random nonce) followed by
//! an XChaCha20-Poly1305 ciphertext of the payload, with the header bound as associated data.
//! The whole byte string is then base62 encoded.
//!
//! ```
//! use branca::{Branca, Config, LocalKey};
//!
//! let key = LocalKey::from_slice(b"supersecretkeyyoushouldnotcommit").unwrap();
//! let branca = Branca::new(Config::new(key).with_ttl(3600));
//!
//! // create and encrypt a new token
//! let token = branca.encode(b"with string".to_vec()).unwrap();
//!
//! // ...
//!
//! // decrypt the token and check it has not expired
//! let decrypted = branca.decode::<Vec<u8>>(&token).unwrap();
//! assert_eq!(decrypted.message, b"with string");
//! ```
#![forbid(unsafe_code)]

pub mod base62;
mod cipher;
pub mod config;
pub mod encodings;
mod engine;
pub mod header;
mod key;
pub mod tokens;
pub mod validation;

pub use jiff;

pub use config::{Config, DEFAULT_MAX_TOKEN_LEN, DEFAULT_TTL};
pub use engine::Branca;
pub use header::{Header, VERSION};
pub use key::LocalKey;
pub use tokens::{DecryptedToken, EncryptedToken};

#[derive(Debug)]
#[non_exhaustive]
/// Error returned for all Branca operations that can fail
pub enum BrancaError {
    /// The token was not valid base62, was too short, or could not be authenticated.
    ///
    /// A wrong key and a tampered ciphertext deliberately produce the same error.
    DecodeError,
    /// The token version byte was not [`VERSION`].
    VersionError,
    /// The token was created more than `ttl` seconds ago.
    ExpiredToken,
    /// Could not decode the provided key
    InvalidKey,
    /// The token timestamp does not fit in an unsigned 32-bit count of seconds.
    InvalidTimestamp,
    /// The operating system random source failed.
    EntropyError,
    /// There was an error with payload processing
    PayloadError(std::io::Error),
}

impl std::error::Error for BrancaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrancaError::PayloadError(x) => Some(x),
            _ => None,
        }
    }
}

impl std::fmt::Display for BrancaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrancaError::DecodeError => f.write_str("Can't decode token"),
            BrancaError::VersionError => f.write_str("Invalid token version"),
            BrancaError::ExpiredToken => f.write_str("Token is expired"),
            BrancaError::InvalidKey => f.write_str("Could not parse the key"),
            BrancaError::InvalidTimestamp => {
                f.write_str("Token timestamp is outside the supported range")
            }
            BrancaError::EntropyError => f.write_str("Could not generate random bytes"),
            BrancaError::PayloadError(x) => {
                write!(f, "there was an error with the payload encoding: {x}")
            }
        }
    }
}
