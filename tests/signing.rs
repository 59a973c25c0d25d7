//! End-to-end exercise of the public signing API: sign a request the way the
//! binary does, then verify it the way a compliant server would.

use {
    http::header::{HeaderMap, HeaderValue},
    sigstream_client::{
        constants::{CONTENT_LENGTH, DATE, X_HMAC_AUTHORIZATION, X_SHA384_CHECKSUM},
        sign_request, verify_headers, ClientConfig,
    },
};

fn config() -> ClientConfig {
    ClientConfig::builder().shared_secret(b"rubbish".to_vec()).build().unwrap()
}

#[test_log::test]
fn signed_get_round_trips_through_verifier() {
    let headers = sign_request(&HeaderMap::new(), "GET", "/stream/foo%20bar", b"", &config()).unwrap();

    for name in [X_SHA384_CHECKSUM, CONTENT_LENGTH, DATE, X_HMAC_AUTHORIZATION] {
        assert!(headers.contains_key(name), "missing {}", name);
    }

    let date = headers.get(DATE).unwrap().to_str().unwrap();
    assert!(date.ends_with(" GMT"), "Date must be an HTTP-date in GMT, got {:?}", date);

    verify_headers(&headers, "GET", "/stream/foo%20bar", b"", b"rubbish").unwrap();
}

#[test_log::test]
fn caller_headers_survive_signing() {
    let mut original = HeaderMap::new();
    original.insert("user-agent", HeaderValue::from_static("sigstream-client/0.1"));

    let signed = sign_request(&original, "GET", "/stream/x", b"", &config()).unwrap();

    assert_eq!(signed.get("user-agent").unwrap(), "sigstream-client/0.1");
    assert_eq!(original.len(), 1);
}

#[test_log::test]
fn tampering_after_signing_fails_verification() {
    let body = b"streamed bytes";
    let mut headers = sign_request(&HeaderMap::new(), "POST", "/upload", body, &config()).unwrap();

    // Flip the checksum to the empty-body value.
    headers.insert(
        X_SHA384_CHECKSUM,
        HeaderValue::from_static("OLBgp1GsljhM2TJ+sbHjaiH9txEUvgdDTAzHv2P24donTt6/529l+9Ua0vFImLlb"),
    );

    assert!(verify_headers(&headers, "POST", "/upload", body, b"rubbish").is_err());
}
