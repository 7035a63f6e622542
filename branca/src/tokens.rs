//! Token types

use std::marker::PhantomData;

use zerocopy::IntoBytes;

use crate::BrancaError;
use crate::cipher;
use crate::encodings::Payload;
use crate::header::{HEADER_LEN, Header, NONCE_LEN, TAG_LEN};
use crate::key::LocalKey;
use crate::validation::Validate;

/// A decrypted token.
///
/// This is both the result of [`EncryptedToken::decrypt`] and the builder for new tokens.
///
/// This type is un-serializable as it isn't encrypted. For that you will want [`EncryptedToken`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptedToken<M = Vec<u8>> {
    /// The message that was contained in the token
    pub message: M,
    /// When the token was created, truncated to whole seconds once encrypted
    pub timestamp: jiff::Timestamp,
}

impl<M> DecryptedToken<M> {
    /// Create a new [`DecryptedToken`] with the given message, stamped with the current time
    pub fn new(message: M) -> Self {
        Self {
            message,
            timestamp: jiff::Timestamp::now(),
        }
    }

    /// Set the creation time of this token.
    pub fn with_timestamp(self, timestamp: jiff::Timestamp) -> Self {
        Self {
            message: self.message,
            timestamp,
        }
    }
}

impl<M: Payload> DecryptedToken<M> {
    /// Encrypt this token using a freshly generated nonce.
    pub fn encrypt(self, key: &LocalKey) -> Result<EncryptedToken<M>, BrancaError> {
        let mut nonce = [0; NONCE_LEN];
        getrandom::fill(&mut nonce).map_err(|_| BrancaError::EntropyError)?;
        self.dangerous_encrypt_with_nonce(key, nonce)
    }

    /// Encrypt this token using the given nonce.
    ///
    /// Reusing a nonce with the same key breaks both confidentiality and integrity of
    /// every token that shares it. Only use this for reproducing test vectors.
    pub fn dangerous_encrypt_with_nonce(
        self,
        key: &LocalKey,
        nonce: [u8; NONCE_LEN],
    ) -> Result<EncryptedToken<M>, BrancaError> {
        let timestamp =
            u32::try_from(self.timestamp.as_second()).map_err(|_| BrancaError::InvalidTimestamp)?;
        let header = Header::new(timestamp, nonce);

        let mut bytes = Vec::with_capacity(HEADER_LEN + 64 + TAG_LEN);
        bytes.extend_from_slice(header.as_bytes());
        self.message
            .encode(&mut bytes)
            .map_err(BrancaError::PayloadError)?;

        let tag = cipher::seal(key, &header, &mut bytes[HEADER_LEN..])?;
        bytes.extend_from_slice(&tag);

        Ok(EncryptedToken {
            header,
            bytes,
            _message: PhantomData,
        })
    }
}

/// An encrypted token.
///
/// This represents a Branca token with a supported version, whose payload is not yet
/// authenticated. To access it, you will need to [`decrypt`](EncryptedToken::decrypt) it.
///
/// Tokens are parsed with [`str::parse`] and serialized with [`ToString`].
pub struct EncryptedToken<M = Vec<u8>> {
    pub(crate) header: Header,
    /// `header || ciphertext || tag`
    pub(crate) bytes: Vec<u8>,
    pub(crate) _message: PhantomData<M>,
}

impl<M> EncryptedToken<M> {
    /// View the **unverified** header for this token
    pub fn unverified_header(&self) -> &Header {
        &self.header
    }
}

impl<M: Payload> EncryptedToken<M> {
    /// Validate the header, then authenticate and decrypt the payload.
    ///
    /// The validation runs before decryption so expired tokens are rejected cheaply.
    /// It is not a security check on its own: the header is only proven authentic once
    /// decryption succeeds.
    pub fn decrypt(
        mut self,
        key: &LocalKey,
        validation: &impl Validate,
    ) -> Result<DecryptedToken<M>, BrancaError> {
        validation.validate(&self.header)?;

        let cleartext = cipher::open(key, &self.header, &mut self.bytes[HEADER_LEN..])?;

        let message = M::decode(cleartext)
            .map_err(std::io::Error::other)
            .map_err(BrancaError::PayloadError)?;

        Ok(DecryptedToken {
            message,
            timestamp: self.header.created_at(),
        })
    }
}
