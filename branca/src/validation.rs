//! Checks on the token header that run before decryption.

use crate::BrancaError;
use crate::header::Header;

pub trait Validate {
    /// The validation to perform on the header
    fn validate(&self, header: &Header) -> Result<(), BrancaError>;

    /// Extend the validation with another validation.
    fn then<V>(self, other: V) -> impl Validate
    where
        Self: Sized,
        V: Validate,
    {
        ValidateThen(self, other)
    }
}

/// Accept tokens of any age.
pub struct NoValidation(());

impl NoValidation {
    pub fn dangerous_no_validation() -> Self {
        NoValidation(())
    }
}

impl Validate for NoValidation {
    fn validate(&self, _: &Header) -> Result<(), BrancaError> {
        Ok(())
    }
}

/// Reject tokens created more than `ttl` seconds before `now`.
///
/// A token created at `t` is still valid at exactly `t + ttl`.
pub struct Expiry {
    now: jiff::Timestamp,
    ttl: u32,
}

impl Expiry {
    pub fn valid_now(ttl: u32) -> Self {
        Self::valid_at(jiff::Timestamp::now(), ttl)
    }

    pub fn valid_at(now: jiff::Timestamp, ttl: u32) -> Self {
        Self { now, ttl }
    }
}

impl Validate for Expiry {
    fn validate(&self, header: &Header) -> Result<(), BrancaError> {
        let expires = i64::from(header.timestamp()) + i64::from(self.ttl);
        if expires < self.now.as_second() {
            return Err(BrancaError::ExpiredToken);
        }

        Ok(())
    }
}

struct ValidateThen<T, U>(T, U);

impl<T: Validate, U: Validate> Validate for ValidateThen<T, U> {
    fn validate(&self, header: &Header) -> Result<(), BrancaError> {
        self.0.validate(header)?;
        self.1.validate(header)
    }
}
