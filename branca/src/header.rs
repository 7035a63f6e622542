//! The fixed-size token header.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned, big_endian};

use crate::BrancaError;

/// The only token version this crate produces and accepts.
pub const VERSION: u8 = 0xBA;
/// Length of the XChaCha20 nonce.
pub const NONCE_LEN: usize = 24;
/// Length of the encoded [`Header`].
pub const HEADER_LEN: usize = 1 + 4 + NONCE_LEN;
/// Length of the Poly1305 tag that follows the ciphertext.
pub const TAG_LEN: usize = 16;

/// Token header: `version || timestamp (u32 big-endian) || nonce`.
///
/// The encoded header is the associated data of the token ciphertext, so any
/// change to it makes decryption fail.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned,
)]
#[repr(C)]
pub struct Header {
    version: u8,
    timestamp: big_endian::U32,
    nonce: [u8; NONCE_LEN],
}

impl Header {
    /// Build a header with the current [`VERSION`].
    pub fn new(timestamp: u32, nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            version: VERSION,
            timestamp: big_endian::U32::new(timestamp),
            nonce,
        }
    }

    /// Split a header off the front of the raw token bytes.
    ///
    /// The version is not checked here.
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8]), BrancaError> {
        Self::read_from_prefix(bytes).map_err(|_| BrancaError::DecodeError)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Seconds since the unix epoch.
    pub fn timestamp(&self) -> u32 {
        self.timestamp.get()
    }

    /// The time the token was created.
    pub fn created_at(&self) -> jiff::Timestamp {
        jiff::Timestamp::from_second(i64::from(self.timestamp()))
            .expect("u32 seconds are always within the supported timestamp range")
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }
}
