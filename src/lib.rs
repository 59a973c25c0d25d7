//! Client for an HMAC-SHA384 request-signing scheme used by a streaming HTTP
//! endpoint.
//!
//! Given request metadata, a body, and a shared secret, [`sign_request`]
//! produces the header set a compliant server needs to authenticate the
//! request:
//!
//! * `X-Sha384-Checksum` -- base64 of the SHA-384 digest of the body
//! * `Content-Length` -- decimal byte length of the body
//! * `Date` -- RFC 1123 HTTP-date in GMT, captured once at signing time
//! * `X-Hmac-Authorization` -- `"<identifier>:<base64 HMAC-SHA384 signature>"`
//!
//! The signature covers the canonical string
//! `{date}\n{content_length}\n{checksum}\n{method}\n{path}`, binding the
//! headers to the exact body and route. Any mutation of the body after signing
//! invalidates the signature.
//!
//! [`fetch_to_file`] wraps the signer with the transport glue the reference
//! client performs: sign an empty-body GET for `/stream/<target>`, send it,
//! and stream the response body to a file.

mod canonical;
mod config;
pub mod constants;
mod crypto;
mod error;
mod signer;
mod transport;

pub use crate::{
    canonical::{string_to_sign, validate_method, validate_path},
    config::{ClientConfig, ClientConfigBuilder},
    error::SignatureError,
    signer::{sign_request, sign_request_at, verify_headers},
    transport::{fetch_to_file, fetch_to_writer, StreamReport},
};
