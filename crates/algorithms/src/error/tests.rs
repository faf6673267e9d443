use super::*;
use licrypt_api::Error as ApiError;

#[test]
fn test_display_formatting() {
    let err = Error::param("key", "must be 64 hex characters");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'key': must be 64 hex characters"
    );

    let err = Error::Length {
        context: "gost89 block",
        expected: 8,
        actual: 5,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for gost89 block: expected 8, got 5"
    );
}

#[test]
fn test_validate_helpers() {
    assert!(validate::parameter(true, "x", "nope").is_ok());
    assert!(validate::parameter(false, "x", "nope").is_err());
    assert!(validate::length("ctx", 8, 8).is_ok());
    assert!(validate::length("ctx", 7, 8).is_err());
    assert!(validate::multiple_of("ctx", 24, 8).is_ok());
    assert!(validate::multiple_of("ctx", 20, 8).is_err());
}

#[test]
fn test_conversion_to_api_error() {
    let err: ApiError = Error::param("signature", "not hex").into();
    assert!(matches!(err, ApiError::InvalidParameter { .. }));

    let err: ApiError = Error::Length {
        context: "ciphertext",
        expected: 16,
        actual: 10,
    }
    .into();
    assert!(matches!(err, ApiError::BufferShape { .. }));

    let err: ApiError = Error::Decode {
        context: "base64",
        details: "bad alphabet byte",
    }
    .into();
    assert!(matches!(err, ApiError::IntegrityFailure { .. }));
}
