//! XChaCha20-Poly1305 with the token header as associated data.

use chacha20poly1305::aead::AeadInPlace;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};
use zerocopy::IntoBytes;

use crate::BrancaError;
use crate::header::{Header, TAG_LEN};
use crate::key::LocalKey;

/// Encrypt the plaintext in place, returning the detached tag.
pub(crate) fn seal(
    key: &LocalKey,
    header: &Header,
    plaintext: &mut [u8],
) -> Result<[u8; TAG_LEN], BrancaError> {
    let tag = XChaCha20Poly1305::new(key.as_raw_bytes().into())
        .encrypt_in_place_detached(header.nonce().into(), header.as_bytes(), plaintext)
        .map_err(|_| {
            BrancaError::PayloadError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "message is too long to encrypt",
            ))
        })?;

    Ok(tag.into())
}

/// Authenticate and decrypt `ciphertext || tag` in place, returning the plaintext.
///
/// Every failure is reported as [`BrancaError::DecodeError`].
pub(crate) fn open<'a>(
    key: &LocalKey,
    header: &Header,
    payload: &'a mut [u8],
) -> Result<&'a [u8], BrancaError> {
    let (ciphertext, tag) = payload
        .split_last_chunk_mut::<TAG_LEN>()
        .ok_or(BrancaError::DecodeError)?;
    let tag: &[u8; TAG_LEN] = tag;

    XChaCha20Poly1305::new(key.as_raw_bytes().into())
        .decrypt_in_place_detached(
            header.nonce().into(),
            header.as_bytes(),
            ciphertext,
            tag.into(),
        )
        .map_err(|_| BrancaError::DecodeError)?;

    Ok(ciphertext)
}
