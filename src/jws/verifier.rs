use crate::algorithm::Algorithm;
use crate::base64url;
use crate::codec::{decode_header, decode_payload, JwsHeader};
use crate::error::Error;
use crate::keys::PublicKey;
use crate::primitive;
use log::{debug, warn};

use super::options::{JwsLimits, JwsVerifyOptions};
use super::parts::{split_jws, JwsParts};

/// Header and payload of a token whose signature has NOT been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct UnverifiedJws {
    pub header: JwsHeader,
    pub payload: Vec<u8>,
}

/// Header and payload of a token whose signature verified.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedJws {
    pub header: JwsHeader,
    pub payload: Vec<u8>,
}

/// Verifies compact JWS tokens against one public key and policy.
#[derive(Debug, Clone)]
pub struct JwsVerifier {
    key: PublicKey,
    options: JwsVerifyOptions,
}

impl JwsVerifier {
    pub fn new(key: PublicKey, options: JwsVerifyOptions) -> Self {
        Self { key, options }
    }

    /// Creates a verifier from a PEM or DER encoded RSA public key.
    pub fn from_public_key(encoded: &[u8], options: JwsVerifyOptions) -> Result<Self, Error> {
        Ok(Self::new(PublicKey::parse(encoded)?, options))
    }

    pub fn key(&self) -> &PublicKey {
        &self.key
    }

    pub fn options(&self) -> &JwsVerifyOptions {
        &self.options
    }

    /// `Ok(false)` means the token is well formed, declares an allowed
    /// algorithm, and its signature does not match. Everything else that is
    /// wrong with the token is an `Err`.
    pub fn verify(&self, token: &str) -> Result<bool, Error> {
        Ok(self.check(token)?.is_some())
    }

    pub fn verify_and_decode(&self, token: &str) -> Result<Option<VerifiedJws>, Error> {
        self.check(token)
    }

    fn check(&self, token: &str) -> Result<Option<VerifiedJws>, Error> {
        if self.options.allowed_algs().is_empty() {
            return Err(Error::AlgorithmNotAllowed(
                "no allowed algorithms configured".to_string(),
            ));
        }
        let parts = split_jws(token)?;
        let limits = self.options.limits();
        let header = decode_header_segment(&parts, limits)?;
        let alg = match header.algorithm() {
            Ok(alg) if self.options.allows(alg) => alg,
            _ => {
                warn!("jws alg rejected by allow-list; alg={:?}", header.alg);
                return Err(Error::AlgorithmNotAllowed(header.alg));
            }
        };
        let payload = decode_payload_segment(&parts, limits)?;
        let signature = base64url::decode(parts.signature)?;
        if !primitive::verify(alg, &self.key, parts.signing_input.as_bytes(), &signature)? {
            debug!(
                "jws signature mismatch; alg={alg}, modulus_bits={}",
                self.key.modulus_bits()
            );
            return Ok(None);
        }
        Ok(Some(VerifiedJws { header, payload }))
    }
}

/// Verifies `token` with default limits, accepting only `allowed_algs`.
pub fn verify(token: &str, key: &PublicKey, allowed_algs: &[Algorithm]) -> Result<bool, Error> {
    JwsVerifier::new(
        key.clone(),
        JwsVerifyOptions::new(allowed_algs.iter().copied()),
    )
    .verify(token)
}

/// Splits and decodes `token` without checking its signature or algorithm.
pub fn decode_unverified(token: &str, limits: &JwsLimits) -> Result<UnverifiedJws, Error> {
    let parts = split_jws(token)?;
    let header = decode_header_segment(&parts, limits)?;
    let payload = decode_payload_segment(&parts, limits)?;
    Ok(UnverifiedJws { header, payload })
}

fn decode_header_segment(parts: &JwsParts<'_>, limits: &JwsLimits) -> Result<JwsHeader, Error> {
    let bytes = base64url::decode_bounded(parts.header, "header", limits.max_header_bytes)
        .inspect_err(warn_on_limit)?;
    decode_header(&bytes)
}

fn decode_payload_segment(parts: &JwsParts<'_>, limits: &JwsLimits) -> Result<Vec<u8>, Error> {
    decode_payload(parts.payload, limits.max_payload_bytes).inspect_err(warn_on_limit)
}

fn warn_on_limit(err: &Error) {
    if let Error::ResourceLimitExceeded {
        what,
        limit,
        actual,
    } = err
    {
        warn!("jws {what} rejected; decoded size {actual} exceeds limit {limit}");
    }
}
