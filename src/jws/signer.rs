use crate::base64url;
use crate::codec::{encode_payload, HeaderParams};
use crate::error::Error;
use crate::keys::{PrivateKey, PublicKey};
use crate::primitive;
use log::debug;

use super::parts::join_signing_input;

/// Produces compact JWS tokens with a fixed private key.
#[derive(Debug, Clone)]
pub struct JwsSigner {
    key: PrivateKey,
}

impl JwsSigner {
    pub fn new(key: PrivateKey) -> Self {
        Self { key }
    }

    /// Creates a signer from a PEM or DER encoded RSA private key.
    pub fn from_private_key(encoded: &[u8]) -> Result<Self, Error> {
        Ok(Self::new(PrivateKey::parse(encoded)?))
    }

    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }

    pub fn sign(&self, header: &HeaderParams, payload: &[u8]) -> Result<String, Error> {
        sign(header, payload, &self.key)
    }
}

/// Signs `payload` under `header` and returns the compact serialization.
pub fn sign(header: &HeaderParams, payload: &[u8], key: &PrivateKey) -> Result<String, Error> {
    let alg = header.alg();
    let signing_input = join_signing_input(
        &base64url::encode(&header.to_bytes()),
        &encode_payload(payload),
    );
    let sig = primitive::sign(alg, key, signing_input.as_bytes())?;
    debug!(
        "signed jws; alg={alg}, modulus_bits={}",
        key.modulus_bits()
    );
    let mut token = signing_input;
    token.push('.');
    token.push_str(&base64url::encode(&sig));
    Ok(token)
}
