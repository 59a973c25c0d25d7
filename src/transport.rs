//! HTTP transport glue: perform a signed GET against the streaming endpoint
//! and copy the response body into a writer.
//!
//! The signer itself never touches the network; everything in this module is
//! the thin layer between it and `reqwest`.

use {
    crate::{sign_request, ClientConfig, SignatureError},
    http::{header::HeaderMap, status::StatusCode},
    log::debug,
    percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC},
    std::{fs::File, io::Write, path::Path},
};

/// Characters to percent-encode in the target path segment: everything except
/// ASCII alphanumerics and the RFC 3986 unreserved marks. A `/` in the target
/// is encoded too, so a target always maps to a single path segment.
const TARGET_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Outcome of a streaming fetch.
#[derive(Clone, Copy, Debug)]
pub struct StreamReport {
    status: StatusCode,
    bytes_written: u64,
}

impl StreamReport {
    /// The HTTP status the server returned.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The number of body bytes copied into the sink.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// Build the request path for a raw target name: `/stream/<encoded target>`.
pub(crate) fn stream_path(target: &str) -> String {
    format!("/stream/{}", utf8_percent_encode(target, TARGET_ENCODE_SET))
}

/// Sign and send a GET for `target`, streaming the response body into `writer`.
///
/// The body is written no matter what status the server returns; the status is
/// reported back to the caller, not retried. A signing failure aborts before
/// anything is sent.
pub fn fetch_to_writer<W: Write>(
    config: &ClientConfig,
    target: &str,
    writer: &mut W,
) -> Result<StreamReport, SignatureError> {
    let path = stream_path(target);
    let signed_headers = sign_request(&HeaderMap::new(), "GET", &path, b"", config)?;

    let url = format!("{}{}", config.base_url(), path);
    debug!("Fetching {}", url);

    let client = reqwest::blocking::Client::new();
    let mut response = client.get(&url).headers(signed_headers).send()?;

    let status = response.status();
    debug!("Server returned {}: {:?}", status, response.headers());

    let bytes_written = response.copy_to(writer)?;
    Ok(StreamReport {
        status,
        bytes_written,
    })
}

/// Sign and send a GET for `target`, streaming the response body into a file.
pub fn fetch_to_file<P: AsRef<Path>>(
    config: &ClientConfig,
    target: &str,
    output: P,
) -> Result<StreamReport, SignatureError> {
    let mut file = File::create(output)?;
    fetch_to_writer(config, target, &mut file)
}
