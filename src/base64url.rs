use crate::error::Error;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes unpadded base64url. Padding characters, the standard alphabet's
/// `+` and `/`, and non-canonical trailing bits are all rejected.
pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    for (idx, &b) in input.as_bytes().iter().enumerate() {
        if !is_url_safe(b) {
            return Err(base64url_error(&format!("invalid character at index {idx}")));
        }
    }
    if input.len() % 4 == 1 {
        return Err(base64url_error("invalid length"));
    }
    URL_SAFE_NO_PAD
        .decode(input.as_bytes())
        .map_err(|e| base64url_error(&e.to_string()))
}

pub(crate) fn decode_bounded(
    input: &str,
    what: &'static str,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let actual = decoded_len(input.len());
    if actual > limit {
        return Err(Error::ResourceLimitExceeded {
            what,
            limit,
            actual,
        });
    }
    decode(input)
}

/// Upper bound of the decoded size for an unpadded input of `encoded_len`.
pub(crate) fn decoded_len(encoded_len: usize) -> usize {
    let tail = match encoded_len % 4 {
        2 => 1,
        3 => 2,
        _ => 0,
    };
    encoded_len / 4 * 3 + tail
}

fn is_url_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

fn base64url_error(message: &str) -> Error {
    Error::MalformedEncoding(message.to_string())
}
