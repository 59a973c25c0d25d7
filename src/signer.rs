//! Request signing and reference verification.
//!
//! [`sign_request`] produces the header set a compliant server needs to
//! authenticate a request: the body checksum, its byte length, the request
//! timestamp, and an HMAC-SHA384 signature over the canonical string binding
//! all of them to the method and path. [`verify_headers`] is the matching
//! reference verifier, used to check the round-trip property in tests and
//! demonstrations; it is not a server-side verification service.

use {
    crate::{
        canonical::{string_to_sign, validate_method, validate_path},
        constants::*,
        crypto::{hmac_sha384_base64, sha384_base64},
        ClientConfig, SignatureError,
    },
    chrono::{DateTime, Utc},
    http::header::{HeaderMap, HeaderValue},
    log::debug,
    subtle::ConstantTimeEq,
};

/// Error message: `"The request signature we calculated does not match the signature you provided."`
const MSG_SIGNATURE_MISMATCH: &str =
    "The request signature we calculated does not match the signature you provided.";

/// Error message: `"The body checksum we calculated does not match the checksum you provided."`
const MSG_CHECKSUM_MISMATCH: &str =
    "The body checksum we calculated does not match the checksum you provided.";

/// Sign a request using the current time.
///
/// Returns a copy of `original_headers` extended with `X-Sha384-Checksum`,
/// `Content-Length`, `Date`, and `X-Hmac-Authorization`. The input header map
/// is never mutated. Apart from the single clock read this is a pure
/// computation; on any failure no headers are produced and the request must
/// not be sent.
pub fn sign_request(
    original_headers: &HeaderMap,
    method: &str,
    path: &str,
    body: &[u8],
    config: &ClientConfig,
) -> Result<HeaderMap, SignatureError> {
    sign_request_at(original_headers, method, path, body, config, Utc::now())
}

/// Sign a request at a fixed timestamp.
///
/// This is the deterministic core of [`sign_request`]: given the same inputs
/// and timestamp it always produces the same header set.
pub fn sign_request_at(
    original_headers: &HeaderMap,
    method: &str,
    path: &str,
    body: &[u8],
    config: &ClientConfig,
    timestamp: DateTime<Utc>,
) -> Result<HeaderMap, SignatureError> {
    validate_method(method)?;
    validate_path(path)?;

    let checksum = sha384_base64(body);
    let date = timestamp.format(HTTP_DATE_FORMAT).to_string();
    let content_length = body.len().to_string();

    let sts = string_to_sign(&date, &content_length, &checksum, method, path);
    let signature = hmac_sha384_base64(config.shared_secret(), sts.as_bytes());
    let authorization = format!("{}:{}", config.identifier(), signature);
    debug!("Signed {} {} as {}", method, path, config.identifier());

    let mut new_headers = original_headers.clone();
    new_headers.insert(X_SHA384_CHECKSUM, header_value(X_SHA384_CHECKSUM, &checksum)?);
    new_headers.insert(CONTENT_LENGTH, header_value(CONTENT_LENGTH, &content_length)?);
    new_headers.insert(DATE, header_value(DATE, &date)?);
    new_headers.insert(X_HMAC_AUTHORIZATION, header_value(X_HMAC_AUTHORIZATION, &authorization)?);
    Ok(new_headers)
}

/// Verify a signed header set against the request line, body, and secret.
///
/// Reconstructs the canonical string from the *transmitted* header values,
/// recomputes the HMAC, and compares both the body checksum and the signature
/// in constant time.
pub fn verify_headers(
    headers: &HeaderMap,
    method: &str,
    path: &str,
    body: &[u8],
    shared_secret: &[u8],
) -> Result<(), SignatureError> {
    validate_method(method)?;
    validate_path(path)?;

    let date = required_header(headers, DATE)?;
    let content_length = required_header(headers, CONTENT_LENGTH)?;
    let checksum = required_header(headers, X_SHA384_CHECKSUM)?;
    let authorization = required_header(headers, X_HMAC_AUTHORIZATION)?;

    let (identifier, provided_signature) = authorization.split_once(':').ok_or_else(|| {
        SignatureError::MalformedHeader(format!(
            "{} must have the form 'identifier:signature'",
            X_HMAC_AUTHORIZATION
        ))
    })?;
    if identifier.is_empty() || provided_signature.is_empty() {
        return Err(SignatureError::MalformedHeader(format!(
            "{} must have the form 'identifier:signature'",
            X_HMAC_AUTHORIZATION
        )));
    }

    let expected_checksum = sha384_base64(body);
    if !bool::from(checksum.as_bytes().ct_eq(expected_checksum.as_bytes())) {
        return Err(SignatureError::SignatureDoesNotMatch(MSG_CHECKSUM_MISMATCH.to_string()));
    }

    let sts = string_to_sign(date, content_length, checksum, method, path);
    let expected_signature = hmac_sha384_base64(shared_secret, sts.as_bytes());
    if bool::from(provided_signature.as_bytes().ct_eq(expected_signature.as_bytes())) {
        debug!("Signature verified for {} {} from {}", method, path, identifier);
        Ok(())
    } else {
        Err(SignatureError::SignatureDoesNotMatch(MSG_SIGNATURE_MISMATCH.to_string()))
    }
}

/// Convert a computed string into a [HeaderValue], surfacing the failure
/// instead of panicking. Cannot fail for values this crate computes.
fn header_value(name: &str, value: &str) -> Result<HeaderValue, SignatureError> {
    HeaderValue::from_str(value)
        .map_err(|_| SignatureError::MalformedHeader(format!("Value for {} is not a valid header value", name)))
}

/// Fetch a header required for verification, decoded as ASCII.
fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, SignatureError> {
    headers
        .get(name)
        .ok_or_else(|| SignatureError::MissingRequiredHeader(name.to_string()))?
        .to_str()
        .map_err(|_| SignatureError::MalformedHeader(format!("Value for {} could not be decoded as ASCII", name)))
}
