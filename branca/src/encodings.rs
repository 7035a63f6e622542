//! Branca payload encodings.

use core::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;

use crate::BrancaError;
use crate::header::{Header, VERSION};
use crate::tokens::EncryptedToken;

/// A Branca payload object.
///
/// Branca payloads are opaque bytes, so `Vec<u8>` is the default.
pub trait Payload: Sized {
    /// Encode the message
    fn encode(self, writer: impl Write) -> Result<(), io::Error>;

    /// Decode the message
    fn decode(payload: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

impl Payload for Vec<u8> {
    fn encode(self, mut writer: impl Write) -> Result<(), io::Error> {
        writer.write_all(&self)
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(payload.to_owned())
    }
}

impl Payload for String {
    fn encode(self, mut writer: impl Write) -> Result<(), io::Error> {
        writer.write_all(self.as_bytes())
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(String::from_utf8(payload.to_owned())?)
    }
}

impl<M> fmt::Display for EncryptedToken<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::base62::write_to_fmt(&self.bytes, f)
    }
}

/// Parsing is quadratic in the token length and does not limit it.
/// [`Branca`](crate::Branca) rejects tokens longer than
/// [`Config::max_token_len`](crate::Config::max_token_len) before parsing them.
impl<M> std::str::FromStr for EncryptedToken<M> {
    type Err = BrancaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::base62::decode_vec(s)?;
        let (header, _) = Header::parse(&bytes)?;

        if header.version() != VERSION {
            return Err(BrancaError::VersionError);
        }

        Ok(Self {
            header,
            bytes,
            _message: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Payload;

    #[test]
    fn string_payload() {
        let mut out = Vec::new();
        "hello".to_string().encode(&mut out).unwrap();
        assert_eq!(out, b"hello");

        assert_eq!(String::decode(b"hello").unwrap(), "hello");
        assert!(String::decode(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn bytes_payload() {
        let mut out = Vec::new();
        vec![0u8, 1, 2].encode(&mut out).unwrap();
        assert_eq!(out, [0, 1, 2]);

        assert_eq!(Vec::<u8>::decode(&[]).unwrap(), b"");
    }
}
