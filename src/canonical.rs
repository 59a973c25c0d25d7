//! Canonical string construction for signature generation.
//!
//! The string to sign binds the request timestamp, body length, body checksum,
//! method, and path into a single newline-delimited byte sequence. A verifying
//! server reconstructs the identical string from the received headers and
//! request line, so the field order here is part of the wire contract and must
//! not change.

use {crate::SignatureError, log::trace};

/// Error message: `"Invalid request method: "`
const MSG_INVALID_METHOD: &str = "Invalid request method: ";

/// Error message: `"Invalid URI path: "`
const MSG_INVALID_PATH: &str = "Invalid URI path: ";

/// Error message: `" (empty)"`
const MSG_EMPTY: &str = " (empty)";

/// Error message: `" (contains a line break)"`
const MSG_LINE_BREAK: &str = " (contains a line break)";

/// Check that an HTTP method is usable as a canonical string field.
///
/// The method is used verbatim -- it is not uppercased or otherwise
/// normalized -- but an empty method or one containing a line break would
/// corrupt the field boundaries of the string to sign and is rejected.
pub fn validate_method(method: &str) -> Result<(), SignatureError> {
    if method.is_empty() {
        return Err(SignatureError::InvalidRequestMethod(format!("{}{}", MSG_INVALID_METHOD, MSG_EMPTY)));
    }
    if method.contains(['\r', '\n']) {
        return Err(SignatureError::InvalidRequestMethod(format!("{}{}", MSG_INVALID_METHOD, MSG_LINE_BREAK)));
    }
    Ok(())
}

/// Check that a request path is usable as a canonical string field.
///
/// The path is expected to arrive already percent-encoded by the caller and is
/// used verbatim. An empty path or one containing a line break is rejected.
pub fn validate_path(path: &str) -> Result<(), SignatureError> {
    if path.is_empty() {
        return Err(SignatureError::InvalidURIPath(format!("{}{}", MSG_INVALID_PATH, MSG_EMPTY)));
    }
    if path.contains(['\r', '\n']) {
        return Err(SignatureError::InvalidURIPath(format!("{}{}", MSG_INVALID_PATH, MSG_LINE_BREAK)));
    }
    Ok(())
}

/// Build the canonical string to sign.
///
/// Layout, with every field joined by a single `\n`:
///
/// ```text
/// {date}\n{content_length}\n{checksum}\n{method}\n{path}
/// ```
pub fn string_to_sign(date: &str, content_length: &str, checksum: &str, method: &str, path: &str) -> String {
    let result = format!("{}\n{}\n{}\n{}\n{}", date, content_length, checksum, method, path);
    trace!("String to sign: {:?}", result);
    result
}
