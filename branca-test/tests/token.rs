use branca::header::{HEADER_LEN, TAG_LEN, VERSION};
use branca::tokens::{DecryptedToken, EncryptedToken};
use branca::validation::NoValidation;
use branca::{Branca, BrancaError, DEFAULT_TTL, LocalKey};
use branca_test::{SECRET_KEY, at, branca, payload_range, raw_bytes, tamper};

#[test]
fn round_trip() {
    let key = LocalKey::from_slice(SECRET_KEY).unwrap();
    let created = branca::jiff::Timestamp::new(1_700_000_000, 500_000_000).unwrap();

    let messages: [&[u8]; 4] = [b"", b"with string", &[0; 100], &[0xff; 1000]];
    for message in messages {
        let token = DecryptedToken::new(message.to_vec())
            .with_timestamp(created)
            .encrypt(&key)
            .unwrap()
            .to_string();

        let decrypted = token
            .parse::<EncryptedToken>()
            .unwrap()
            .decrypt(&key, &NoValidation::dangerous_no_validation())
            .unwrap();

        assert_eq!(decrypted.message, message);
        assert_eq!(decrypted.timestamp, at(1_700_000_000));
        assert_eq!(
            raw_bytes(&token).len(),
            HEADER_LEN + message.len() + TAG_LEN
        );
    }
}

#[test]
fn header_layout() {
    let branca = branca();
    let token = branca
        .encode_at(b"with string".to_vec(), at(0x5F5E_1000))
        .unwrap();

    let raw = raw_bytes(&token);
    assert_eq!(hex::encode(&raw[..5]), "ba5f5e1000");
    assert_eq!(raw[0], VERSION);
}

#[test]
fn alphabet_closure() {
    let branca = branca();
    for message in ["", "any payload", "\0\0\0", "ünïcödé"] {
        let token = branca.encode(message.to_string()).unwrap();
        assert!(token.bytes().all(|c| c.is_ascii_alphanumeric()), "{token}");
    }
}

#[test]
fn nonce_is_fresh() {
    let branca = branca();
    let a = branca.encode_at(b"same".to_vec(), at(1_000)).unwrap();
    let b = branca.encode_at(b"same".to_vec(), at(1_000)).unwrap();
    assert_ne!(a, b);
    assert_ne!(raw_bytes(&a)[5..HEADER_LEN], raw_bytes(&b)[5..HEADER_LEN]);
}

#[test]
fn version_rejection() {
    let branca = branca();
    let token = branca.encode(b"with string".to_vec()).unwrap();

    for version in [0x00, 0x01, 0x7F, 0xB9, 0xBB, 0xFF] {
        let token = tamper(&token, |bytes| bytes[0] = version);
        assert!(
            matches!(
                branca.decode::<Vec<u8>>(&token),
                Err(BrancaError::VersionError)
            ),
            "version {version:#x}"
        );
    }
}

#[test]
fn leading_zero_symbol_is_rejected() {
    let branca = branca();
    let token = branca.encode(b"with string".to_vec()).unwrap();
    assert!(!token.starts_with('0'));

    // each leading `0` decodes to a zero byte, which is not a valid version
    let token = format!("0{token}");
    assert!(matches!(
        branca.decode::<Vec<u8>>(&token),
        Err(BrancaError::VersionError)
    ));
}

#[test]
fn expiry_boundary() {
    const T: u32 = 1_700_000_000;

    let key = LocalKey::from_slice(SECRET_KEY).unwrap();
    let branca = Branca::new(branca::Config::new(key).with_ttl(60));
    let token = branca.encode_at(b"payload".to_vec(), at(T)).unwrap();

    assert!(branca.decode_at::<Vec<u8>>(&token, at(T + 59)).is_ok());
    // valid through `timestamp + ttl` inclusive
    assert!(branca.decode_at::<Vec<u8>>(&token, at(T + 60)).is_ok());
    assert!(matches!(
        branca.decode_at::<Vec<u8>>(&token, at(T + 61)),
        Err(BrancaError::ExpiredToken)
    ));
}

#[test]
fn key_isolation() {
    let branca = branca();
    let token = branca.encode(b"with string".to_vec()).unwrap();

    for _ in 0..10 {
        let other = LocalKey::random().unwrap();
        assert!(matches!(
            branca.decode_with::<Vec<u8>>(&token, DEFAULT_TTL, &other),
            Err(BrancaError::DecodeError)
        ));
    }
}

#[test]
fn tamper_detection() {
    let branca = branca();
    let key = &branca.config().key;
    let token = branca.encode(b"with string".to_vec()).unwrap();

    // timestamp, nonce, ciphertext and tag
    for i in (1..HEADER_LEN).chain(payload_range(&token)) {
        let tampered = tamper(&token, |bytes| bytes[i] ^= 0x01);
        assert!(
            matches!(
                branca.decode_with::<Vec<u8>>(&tampered, u32::MAX, key),
                Err(BrancaError::DecodeError)
            ),
            "byte {i}"
        );
    }
}

#[test]
fn truncated_tokens() {
    let branca = branca();
    let token = branca.encode(b"with string".to_vec()).unwrap();

    // shorter than a header
    let short = tamper(&token, |bytes| bytes.truncate(HEADER_LEN - 1));
    assert!(matches!(
        branca.decode::<Vec<u8>>(&short),
        Err(BrancaError::DecodeError)
    ));

    // a header without a tag
    let header_only = tamper(&token, |bytes| bytes.truncate(HEADER_LEN + TAG_LEN - 1));
    assert!(matches!(
        branca.decode::<Vec<u8>>(&header_only),
        Err(BrancaError::DecodeError)
    ));

    // missing the last byte of the tag
    let clipped = tamper(&token, |bytes| {
        bytes.pop();
    });
    assert!(matches!(
        branca.decode::<Vec<u8>>(&clipped),
        Err(BrancaError::DecodeError)
    ));

    assert!(matches!(
        branca.decode::<Vec<u8>>(""),
        Err(BrancaError::DecodeError)
    ));
}

#[test]
fn invalid_characters() {
    let branca = branca();
    let token = branca.encode(b"with string".to_vec()).unwrap();

    for bad in [
        format!("{token}="),
        format!("{token}-"),
        token.replacen(|c: char| c.is_ascii_alphanumeric(), "_", 1),
        format!(" {token}"),
    ] {
        assert!(matches!(
            branca.decode::<Vec<u8>>(&bad),
            Err(BrancaError::DecodeError)
        ));
    }
}

#[test]
fn default_configuration() {
    let branca = Branca::random().unwrap();

    let first = *branca.config().key.as_raw_bytes();
    let second = *branca.config().key.as_raw_bytes();
    assert_eq!(first, second);
    assert_eq!(first.len(), 32);
    assert_ne!(first, [0; 32]);
    assert_eq!(branca.config().ttl, 86_400);
    assert_eq!(branca.config().max_token_len, branca::DEFAULT_MAX_TOKEN_LEN);

    let other = Branca::random().unwrap();
    assert_ne!(other.config().key.as_raw_bytes(), &first);
}

#[test]
fn errors_display() {
    assert_eq!(BrancaError::DecodeError.to_string(), "Can't decode token");
    assert_eq!(BrancaError::ExpiredToken.to_string(), "Token is expired");
    assert_eq!(
        BrancaError::VersionError.to_string(),
        "Invalid token version"
    );
}
