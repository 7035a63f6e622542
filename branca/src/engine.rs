//! Token engine: encode and decode with a shared [`Config`].

use crate::BrancaError;
use crate::config::Config;
use crate::encodings::Payload;
use crate::key::LocalKey;
use crate::tokens::{DecryptedToken, EncryptedToken};
use crate::validation::{Expiry, Validate};

/// Encodes and decodes Branca tokens using a [`Config`].
///
/// Every method takes `&self`, so a `Branca` can be shared between threads
/// (e.g. in an `Arc`). Changing the configuration needs `&mut self` through
/// [`config_mut`](Branca::config_mut); to use a different key or ttl for a single
/// call, use the `*_with` methods instead.
///
/// Decoding is quadratic in the token length, so tokens longer than
/// [`Config::max_token_len`] are rejected with [`BrancaError::DecodeError`] before they are
/// decoded, and encode refuses to produce them.
#[derive(Clone, Debug)]
pub struct Branca {
    config: Config,
}

impl Branca {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Use a random key and the default ttl.
    pub fn random() -> Result<Self, BrancaError> {
        Config::random().map(Self::new)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Encrypt the message into a token created now.
    pub fn encode<M: Payload>(&self, message: M) -> Result<String, BrancaError> {
        self.encode_at(message, jiff::Timestamp::now())
    }

    /// Encrypt the message into a token created at `timestamp`.
    pub fn encode_at<M: Payload>(
        &self,
        message: M,
        timestamp: jiff::Timestamp,
    ) -> Result<String, BrancaError> {
        self.encode_with(message, timestamp, &self.config.key)
    }

    /// Encrypt the message with the given key instead of the configured one.
    pub fn encode_with<M: Payload>(
        &self,
        message: M,
        timestamp: jiff::Timestamp,
        key: &LocalKey,
    ) -> Result<String, BrancaError> {
        let token = DecryptedToken::new(message)
            .with_timestamp(timestamp)
            .encrypt(key)?
            .to_string();

        if token.len() > self.config.max_token_len {
            return Err(BrancaError::PayloadError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "token is longer than the configured maximum",
            )));
        }

        tracing::trace!(len = token.len(), "encoded branca token");
        Ok(token)
    }

    /// Decrypt a token, checking it against the configured ttl.
    pub fn decode<M: Payload>(&self, token: &str) -> Result<DecryptedToken<M>, BrancaError> {
        self.decode_at(token, jiff::Timestamp::now())
    }

    /// Decrypt a token as if the current time were `now`.
    pub fn decode_at<M: Payload>(
        &self,
        token: &str,
        now: jiff::Timestamp,
    ) -> Result<DecryptedToken<M>, BrancaError> {
        let validation = Expiry::valid_at(now, self.config.ttl);
        self.decode_inner(token, &self.config.key, &validation)
    }

    /// Decrypt a token with the given ttl and key instead of the configured ones.
    pub fn decode_with<M: Payload>(
        &self,
        token: &str,
        ttl: u32,
        key: &LocalKey,
    ) -> Result<DecryptedToken<M>, BrancaError> {
        self.decode_inner(token, key, &Expiry::valid_now(ttl))
    }

    fn decode_inner<M: Payload>(
        &self,
        token: &str,
        key: &LocalKey,
        validation: &impl Validate,
    ) -> Result<DecryptedToken<M>, BrancaError> {
        let res = if token.len() > self.config.max_token_len {
            Err(BrancaError::DecodeError)
        } else {
            token
                .parse::<EncryptedToken<M>>()
                .and_then(|token| token.decrypt(key, validation))
        };

        if let Err(err) = &res {
            tracing::debug!(error = %err, len = token.len(), "rejected branca token");
        }
        res
    }
}
