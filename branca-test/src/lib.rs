use branca::header::HEADER_LEN;
use branca::{Branca, Config, LocalKey};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SECRET_KEY: &[u8; 32] = b"supersecretkeyyoushouldnotcommit";

/// A branca with a fixed key and a one hour ttl.
pub fn branca() -> Branca {
    let key = LocalKey::from_slice(SECRET_KEY).unwrap();
    Branca::new(Config::new(key).with_ttl(3_600))
}

pub fn at(second: u32) -> branca::jiff::Timestamp {
    branca::jiff::Timestamp::from_second(i64::from(second)).unwrap()
}

/// The kind of payload a web application puts in a session token.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Session {
    pub user_id: String,
    pub user_ids: Vec<String>,
    pub logo_id: String,
    pub stage: String,
}

/// This payload used to produce tokens starting with `0` when leading zeros were dropped.
pub fn leading_zero_session() -> Session {
    Session {
        user_id: "16574".to_string(),
        user_ids: vec!["16574".to_string()],
        logo_id: "c55953547000101".to_string(),
        stage: "production".to_string(),
    }
}

/// Raw `header || ciphertext || tag` bytes of a token.
pub fn raw_bytes(token: &str) -> Vec<u8> {
    branca::base62::decode_vec(token).unwrap()
}

/// Re-encode the token after applying `f` to its raw bytes.
pub fn tamper(token: &str, f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut bytes = raw_bytes(token);
    f(&mut bytes);
    branca::base62::encode(&bytes)
}

/// Index range of the ciphertext and tag in the raw bytes.
pub fn payload_range(token: &str) -> std::ops::Range<usize> {
    HEADER_LEN..raw_bytes(token).len()
}

/// Read a vector file from `tests/vectors`.
pub fn read_test<Test: DeserializeOwned>(v: &str) -> TestFile<Test> {
    let path = format!("tests/vectors/{v}");
    let file = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&file).unwrap()
}

#[derive(Deserialize)]
pub struct TestFile<T> {
    pub tests: Vec<Test<T>>,
}

#[derive(Deserialize)]
pub struct Test<T> {
    pub name: String,
    #[serde(flatten)]
    pub test_data: T,
}

/// Deserializes only from the boolean `B`, to tell untagged vector kinds apart.
#[derive(Debug)]
pub struct Bool<const B: bool>;

impl<'a, const B: bool> Deserialize<'a> for Bool<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        struct BoolVisitor<const B: bool>;

        impl<const B: bool> serde::de::Visitor<'_> for BoolVisitor<B> {
            type Value = Bool<B>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "{B}")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                (v == B)
                    .then_some(Bool)
                    .ok_or_else(|| E::custom(format!("expected {B}, got {v}")))
            }
        }

        deserializer.deserialize_bool(BoolVisitor)
    }
}
