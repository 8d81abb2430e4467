mod jwk;
mod pem;

use crate::error::Error;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;

/// RSA public key. The only key role accepted on the verify path.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

/// RSA private key, including CRT parameters when the encoding carries them.
#[derive(Clone)]
pub struct PrivateKey {
    inner: RsaPrivateKey,
}

/// A key whose role was detected from its encoding.
#[derive(Debug, Clone)]
pub enum Key {
    Public(PublicKey),
    Private(PrivateKey),
}

impl PublicKey {
    /// Parses a PEM (`RSA PUBLIC KEY` / `PUBLIC KEY`) or DER (PKCS#1 / SPKI)
    /// encoded RSA public key.
    pub fn parse(encoded: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            inner: pem::load_public_key(encoded)?,
        })
    }

    /// Parses an RSA JWK (`kty`, `n`, `e`).
    pub fn from_jwk(jwk: &serde_json::Value) -> Result<Self, Error> {
        Ok(Self {
            inner: jwk::public_key_from_jwk(jwk)?,
        })
    }

    pub fn to_jwk(&self) -> serde_json::Value {
        jwk::public_key_to_jwk(&self.inner)
    }

    pub fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    /// Length in bytes of every signature produced under this modulus.
    pub fn signature_len(&self) -> usize {
        self.inner.size()
    }

    pub(crate) fn rsa(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl PrivateKey {
    /// Parses a PEM (`RSA PRIVATE KEY` / `PRIVATE KEY`) or DER (PKCS#1 /
    /// PKCS#8) encoded RSA private key.
    pub fn parse(encoded: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            inner: pem::load_private_key(encoded)?,
        })
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.to_public_key(),
        }
    }

    pub fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    pub(crate) fn rsa(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl Key {
    /// Parses either key role. PEM blocks are classified by tag, DER input is
    /// tried as a public key first.
    pub fn parse(encoded: &[u8]) -> Result<Self, Error> {
        match PublicKey::parse(encoded) {
            Ok(key) => Ok(Key::Public(key)),
            Err(Error::InvalidKeyFormat(_)) => PrivateKey::parse(encoded).map(Key::Private),
            Err(err) => Err(err),
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Key::Private(_))
    }

    /// Returns the public key, refusing to narrow a private key implicitly.
    pub fn into_public(self) -> Result<PublicKey, Error> {
        match self {
            Key::Public(key) => Ok(key),
            Key::Private(_) => Err(Error::InvalidKeyFormat(
                "expected public key, found private key".to_string(),
            )),
        }
    }

    pub fn into_private(self) -> Result<PrivateKey, Error> {
        match self {
            Key::Private(key) => Ok(key),
            Key::Public(_) => Err(Error::InvalidKeyFormat(
                "expected private key, found public key".to_string(),
            )),
        }
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("modulus_bits", &self.modulus_bits())
            .field("e", &format_args!("{}", self.inner.e()))
            .finish()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish_non_exhaustive()
    }
}

pub fn parse_public_key(encoded: &[u8]) -> Result<PublicKey, Error> {
    PublicKey::parse(encoded)
}

pub fn parse_private_key(encoded: &[u8]) -> Result<PrivateKey, Error> {
    PrivateKey::parse(encoded)
}
