use {
    base64::{engine::general_purpose::STANDARD as BASE64, Engine},
    hmac::{Hmac, Mac},
    sha2::{Digest, Sha384},
};

type HmacSha384 = Hmac<Sha384>;

/// Wrapper function to form a HMAC-SHA384 operation.
#[inline(always)]
pub(crate) fn hmac_sha384(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha384::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(value);
    mac.finalize().into_bytes().to_vec()
}

#[inline(always)]
pub(crate) fn sha384(value: &[u8]) -> Vec<u8> {
    Sha384::digest(value).to_vec()
}

#[inline(always)]
pub(crate) fn sha384_base64(value: &[u8]) -> String {
    BASE64.encode(sha384(value))
}

#[inline(always)]
pub(crate) fn hmac_sha384_base64(key: &[u8], value: &[u8]) -> String {
    BASE64.encode(hmac_sha384(key, value))
}
