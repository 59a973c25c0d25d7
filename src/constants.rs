//! Constants used by the signing client.

/// Header carrying the base64-encoded SHA-384 checksum of the request body.
pub const X_SHA384_CHECKSUM: &str = "X-Sha384-Checksum";

/// Header carrying `"<identifier>:<base64 HMAC-SHA384 signature>"`.
pub const X_HMAC_AUTHORIZATION: &str = "X-Hmac-Authorization";

/// Header carrying the request timestamp in HTTP-date format.
pub const DATE: &str = "Date";

/// Header carrying the decimal byte length of the request body.
pub const CONTENT_LENGTH: &str = "Content-Length";

/// RFC 1123 HTTP-date format, always rendered in GMT. The verifying server
/// reconstructs the string to sign from this header value byte-for-byte, so
/// the offset must be the literal `GMT`, not `+0000`.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Length of a SHA-384 digest in bytes.
pub const SHA384_OUTPUT_LEN: usize = 48;

/// Default client identifier sent in the `X-Hmac-Authorization` header.
pub const DEFAULT_IDENTIFIER: &str = "testscript";

/// Default base URL of the streaming endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Error code: `"InvalidRequestMethod"`
pub const ERR_CODE_INVALID_REQUEST_METHOD: &str = "InvalidRequestMethod";

/// Error code: `"InvalidURIPath"`
pub const ERR_CODE_INVALID_URI_PATH: &str = "InvalidURIPath";

/// Error code: `"MalformedHeader"`
pub const ERR_CODE_MALFORMED_HEADER: &str = "MalformedHeader";

/// Error code: `"MissingRequiredHeader"`
pub const ERR_CODE_MISSING_REQUIRED_HEADER: &str = "MissingRequiredHeader";

/// Error code: `"SignatureDoesNotMatch"`
pub const ERR_CODE_SIGNATURE_DOES_NOT_MATCH: &str = "SignatureDoesNotMatch";

/// Error code: `"InternalFailure"`
pub const ERR_CODE_INTERNAL_FAILURE: &str = "InternalFailure";

/// Error code: `"TransportFailure"`
pub const ERR_CODE_TRANSPORT_FAILURE: &str = "TransportFailure";
