use {
    crate::constants::*,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
        io::Error as IOError,
    },
};

/// Error returned when signing a request or verifying a signed header set fails.
#[derive(Debug)]
#[non_exhaustive]
pub enum SignatureError {
    /// Signing failed due to an underlying I/O error (e.g. writing the response stream).
    IO(IOError),

    /// The HTTP method is empty or contains characters that would corrupt the
    /// canonical string's field boundaries.
    InvalidRequestMethod(/* message */ String),

    /// The request path is empty or contains characters that would corrupt the
    /// canonical string's field boundaries.
    InvalidURIPath(/* message */ String),

    /// A computed or received header value could not be carried in an HTTP header,
    /// or could not be parsed during verification (e.g. an `X-Hmac-Authorization`
    /// value with no `identifier:` prefix).
    MalformedHeader(/* message */ String),

    /// A header required for verification was absent from the header set.
    MissingRequiredHeader(/* header name */ String),

    /// The signature or checksum did not match the recomputed value.
    SignatureDoesNotMatch(/* message */ String),

    /// The HTTP transport failed before or while streaming the response.
    Transport(Box<dyn Error + Send + Sync>),
}

impl SignatureError {
    /// A short machine-readable code naming the failure class.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::IO(_) => ERR_CODE_INTERNAL_FAILURE,
            Self::InvalidRequestMethod(_) => ERR_CODE_INVALID_REQUEST_METHOD,
            Self::InvalidURIPath(_) => ERR_CODE_INVALID_URI_PATH,
            Self::MalformedHeader(_) => ERR_CODE_MALFORMED_HEADER,
            Self::MissingRequiredHeader(_) => ERR_CODE_MISSING_REQUIRED_HEADER,
            Self::SignatureDoesNotMatch(_) => ERR_CODE_SIGNATURE_DOES_NOT_MATCH,
            Self::Transport(_) => ERR_CODE_TRANSPORT_FAILURE,
        }
    }
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::IO(ref e) => Display::fmt(e, f),
            Self::InvalidRequestMethod(msg) => f.write_str(msg),
            Self::InvalidURIPath(msg) => f.write_str(msg),
            Self::MalformedHeader(msg) => f.write_str(msg),
            Self::MissingRequiredHeader(name) => write!(f, "Request is missing required header: {}", name),
            Self::SignatureDoesNotMatch(msg) => f.write_str(msg),
            Self::Transport(ref e) => Display::fmt(e, f),
        }
    }
}

impl Error for SignatureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IO(ref e) => Some(e),
            Self::Transport(ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<IOError> for SignatureError {
    fn from(e: IOError) -> SignatureError {
        SignatureError::IO(e)
    }
}

impl From<reqwest::Error> for SignatureError {
    fn from(e: reqwest::Error) -> SignatureError {
        SignatureError::Transport(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use {crate::SignatureError, std::io::{Error as IOError, ErrorKind}};

    #[test_log::test]
    fn test_error_codes() {
        let e = SignatureError::InvalidRequestMethod("Invalid request method: ".to_string());
        assert_eq!(e.error_code(), "InvalidRequestMethod");
        assert_eq!(format!("{}", e), "Invalid request method: ");

        let e = SignatureError::InvalidURIPath("Path contains a newline".to_string());
        assert_eq!(e.error_code(), "InvalidURIPath");
        assert_eq!(format!("{}", e), "Path contains a newline");

        let e = SignatureError::MissingRequiredHeader("Date".to_string());
        assert_eq!(e.error_code(), "MissingRequiredHeader");
        assert_eq!(format!("{}", e), "Request is missing required header: Date");

        let e = SignatureError::SignatureDoesNotMatch("The signature does not match".to_string());
        assert_eq!(e.error_code(), "SignatureDoesNotMatch");
    }

    #[test_log::test]
    fn test_from_io() {
        use std::error::Error;
        let e = SignatureError::from(IOError::new(ErrorKind::Other, "disk on fire"));
        assert_eq!(e.error_code(), "InternalFailure");
        assert_eq!(e.to_string(), "disk on fire");
        assert!(e.source().is_some());
    }
}
