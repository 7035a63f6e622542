use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::BrancaError;

/// Symmetric key used for [`encryption`](crate::DecryptedToken::encrypt) and
/// [`decryption`](crate::EncryptedToken::decrypt).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LocalKey([u8; 32]);

impl LocalKey {
    /// Generate a random key
    pub fn random() -> Result<Self, BrancaError> {
        let mut bytes = [0; 32];
        getrandom::fill(&mut bytes).map_err(|_| BrancaError::EntropyError)?;
        Ok(Self(bytes))
    }

    pub fn from_raw_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    /// Use a byte string as a key. It must be exactly 32 bytes long.
    pub fn from_slice(b: &[u8]) -> Result<Self, BrancaError> {
        b.try_into().map(Self).map_err(|_| BrancaError::InvalidKey)
    }

    /// View the raw key bytes of the key.
    ///
    /// Be advised that serializing key data can be dangerous. Make sure
    /// they are saved on secure disks or sent on secure connections only.
    pub fn as_raw_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LocalKey(..)")
    }
}

/// Parses a key from 64 hex digits.
impl core::str::FromStr for LocalKey {
    type Err = BrancaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| BrancaError::InvalidKey)?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FromStrVisitor;
        impl serde::de::Visitor<'_> for FromStrVisitor {
            type Value = LocalKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex encoded 32 byte key")
            }
            fn visit_str<Err>(self, v: &str) -> Result<Self::Value, Err>
            where
                Err: serde::de::Error,
            {
                v.parse().map_err(Err::custom)
            }
        }
        deserializer.deserialize_str(FromStrVisitor)
    }
}
