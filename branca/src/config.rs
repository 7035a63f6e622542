//! Default key and time-to-live used by [`Branca`](crate::Branca).

use crate::BrancaError;
use crate::key::LocalKey;

/// Default token lifetime, 24 hours.
pub const DEFAULT_TTL: u32 = 86_400;

/// Default limit on the length of token text, in characters.
///
/// Base62 decoding is quadratic in the token length, so longer text is rejected before
/// decoding. This allows payloads of roughly 12 KiB.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 16_384;

/// The key and ttl a [`Branca`](crate::Branca) uses unless a call overrides them.
///
/// With the `serde` feature this can be deserialized, e.g. from JSON:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// let config: branca::Config = serde_json::from_str(r#"{
///     "key": "73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d6974",
///     "ttl": 3600
/// }"#).unwrap();
/// assert_eq!(config.ttl, 3600);
/// assert_eq!(config.max_token_len, branca::config::DEFAULT_MAX_TOKEN_LEN);
/// # }
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Config {
    /// Key used to encrypt and decrypt tokens.
    pub key: LocalKey,
    /// Seconds a token stays valid after its creation time.
    #[cfg_attr(feature = "serde", serde(default = "default_ttl"))]
    pub ttl: u32,
    /// Tokens longer than this many characters are rejected without being decoded.
    #[cfg_attr(feature = "serde", serde(default = "default_max_token_len"))]
    pub max_token_len: usize,
}

#[cfg(feature = "serde")]
fn default_ttl() -> u32 {
    DEFAULT_TTL
}

#[cfg(feature = "serde")]
fn default_max_token_len() -> usize {
    DEFAULT_MAX_TOKEN_LEN
}

impl Config {
    /// Use the given key with the [`DEFAULT_TTL`] and [`DEFAULT_MAX_TOKEN_LEN`].
    pub fn new(key: LocalKey) -> Self {
        Self {
            key,
            ttl: DEFAULT_TTL,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }

    /// Generate a random key, with the [`DEFAULT_TTL`].
    ///
    /// Tokens encrypted with a random key can only be decrypted by this process.
    pub fn random() -> Result<Self, BrancaError> {
        LocalKey::random().map(Self::new)
    }

    pub fn with_ttl(self, ttl: u32) -> Self {
        Self { ttl, ..self }
    }

    pub fn with_max_token_len(self, max_token_len: usize) -> Self {
        Self {
            max_token_len,
            ..self
        }
    }
}
