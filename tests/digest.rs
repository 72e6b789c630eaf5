use nebula_sha256::{Digest, DigestParseError, sha256};

const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[test]
fn digest_formats_as_lowercase_hex() {
    let digest = sha256(b"abc");

    assert_eq!(digest.to_hex(), ABC_HEX);
    assert_eq!(digest.to_string(), ABC_HEX);
    assert_eq!(format!("{digest:x}"), ABC_HEX);
    assert_eq!(format!("{digest:X}"), ABC_HEX.to_uppercase());
    assert_eq!(format!("{digest:?}"), format!("Digest({ABC_HEX})"));
}

#[test]
fn digest_parses_from_hex() {
    let parsed: Digest = ABC_HEX.parse().unwrap();
    assert_eq!(parsed, sha256(b"abc"));

    let upper = Digest::from_hex(&ABC_HEX.to_uppercase()).unwrap();
    assert_eq!(upper, parsed);
}

#[test]
fn digest_rejects_wrong_length() {
    assert_eq!(
        Digest::from_hex(&ABC_HEX[..62]),
        Err(DigestParseError::InvalidLength(62))
    );
    assert_eq!(
        Digest::from_hex(&format!("{ABC_HEX}00")),
        Err(DigestParseError::InvalidLength(66))
    );
    assert_eq!(Digest::from_hex(""), Err(DigestParseError::InvalidLength(0)));
}

#[test]
fn digest_rejects_non_hex() {
    let mut bad = ABC_HEX.to_string();
    bad.replace_range(10..11, "g");

    assert_eq!(
        Digest::from_hex(&bad),
        Err(DigestParseError::InvalidHex {
            character: 'g',
            index: 10,
        })
    );

    let with_prefix = format!("0x{}", &ABC_HEX[2..]);
    assert!(matches!(
        Digest::from_hex(&with_prefix),
        Err(DigestParseError::InvalidHex { character: 'x', .. })
    ));
}

#[test]
fn digest_byte_conversions() {
    let digest = sha256(b"abc");
    let bytes: [u8; 32] = digest.into();

    assert_eq!(Digest::from(bytes), digest);
    assert_eq!(&bytes, digest.as_bytes());
    assert_eq!(digest.to_bytes(), bytes);

    assert_eq!(Digest::try_from(&bytes[..]).unwrap(), digest);
    assert!(Digest::try_from(&bytes[..31]).is_err());
}

#[test]
fn digest_ordering_follows_bytes() {
    let mut low = [0u8; 32];
    let mut high = [0u8; 32];
    low[31] = 1;
    high[0] = 1;

    assert!(Digest::from(low) < Digest::from(high));
    assert_eq!(Digest::default(), Digest::from([0u8; 32]));
}

#[test]
fn parse_error_messages() {
    assert_eq!(
        DigestParseError::InvalidLength(3).to_string(),
        "invalid digest length: expected 64 hex digits, got 3"
    );
    assert_eq!(
        DigestParseError::InvalidHex {
            character: 'z',
            index: 4
        }
        .to_string(),
        "invalid hex digit 'z' at index 4"
    );
}

#[cfg(feature = "serde")]
#[test]
fn digest_serde_as_hex_string() {
    let digest = sha256(b"abc");

    let json = serde_json::to_string(&digest).unwrap();
    assert_eq!(json, format!("\"{ABC_HEX}\""));

    let back: Digest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, digest);

    assert!(serde_json::from_str::<Digest>("\"abc\"").is_err());
}
