#![forbid(unsafe_code)]
//! JSON payloads for Branca tokens.
//!
//! ```
//! use branca::{Branca, Config, LocalKey};
//! use branca_json::Json;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Session {
//!     user_id: String,
//!     stage: String,
//! }
//!
//! let branca = Branca::new(Config::new(LocalKey::random().unwrap()));
//!
//! let session = Session {
//!     user_id: "16574".to_string(),
//!     stage: "production".to_string(),
//! };
//! let token = branca.encode(Json(session)).unwrap();
//!
//! let Json(session) = branca.decode::<Json<Session>>(&token).unwrap().message;
//! assert_eq!(session.user_id, "16574");
//! ```

use std::error::Error;
use std::io;

use branca::encodings::Payload;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `Json` is a type wrapper to implement [`Payload`] for all types that implement
/// [`serde::Serialize`] and [`serde::Deserialize`]
///
/// The payload is only deserialized after the token has been authenticated, so the
/// JSON parser never sees attacker controlled bytes unless the key has leaked.
/// You should still parse into a known struct layout, and avoid arbitrary key-value mappings.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<M: Serialize + DeserializeOwned> Payload for Json<M> {
    fn encode(self, writer: impl io::Write) -> Result<(), io::Error> {
        serde_json::to_writer(writer, &self.0).map_err(io::Error::from)
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        serde_json::from_slice(payload)
            .map_err(From::from)
            .map(Self)
    }
}
