#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed base64url encoding: {0}")]
    MalformedEncoding(String),
    #[error("malformed token: {0}")]
    MalformedToken(String),
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("header is missing the alg parameter")]
    MissingAlgorithm,
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("algorithm not allowed: {0}")]
    AlgorithmNotAllowed(String),
    #[error("{what} exceeds limit: {actual} > {limit} bytes")]
    ResourceLimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },
    #[error("crypto error: {0}")]
    Crypto(String),
}

impl Error {
    /// True for errors describing the token itself rather than the caller's
    /// key or configuration.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedEncoding(_)
                | Error::MalformedToken(_)
                | Error::MalformedHeader(_)
                | Error::MissingAlgorithm
                | Error::AlgorithmNotAllowed(_)
                | Error::ResourceLimitExceeded { .. }
        )
    }
}
