use crate::error::Error;
use pem::parse_many;
use pkcs8::spki::SubjectPublicKeyInfoRef;
use pkcs8::{DecodePrivateKey, DecodePublicKey, ObjectIdentifier, PrivateKeyInfo};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

const PUBLIC_TAGS: &[&str] = &["RSA PUBLIC KEY", "PUBLIC KEY"];
const PRIVATE_TAGS: &[&str] = &[
    "RSA PRIVATE KEY",
    "PRIVATE KEY",
    "EC PRIVATE KEY",
    "ENCRYPTED PRIVATE KEY",
];

pub(super) fn load_public_key(encoded: &[u8]) -> Result<RsaPublicKey, Error> {
    if !is_pem(encoded) {
        return parse_public_der(encoded);
    }
    let blocks = parse_many(encoded)
        .map_err(|e| Error::InvalidKeyFormat(format!("pem parse error: {e}")))?;
    for block in blocks {
        match block.tag() {
            "RSA PUBLIC KEY" => return parse_rsa_public_pkcs1(block.contents()),
            "PUBLIC KEY" => return parse_public_spki(block.contents()),
            tag if PRIVATE_TAGS.contains(&tag) => return Err(role_mismatch("public", "private")),
            _ => {}
        }
    }
    Err(Error::InvalidKeyFormat(
        "no public key pem block found".to_string(),
    ))
}

pub(super) fn load_private_key(encoded: &[u8]) -> Result<RsaPrivateKey, Error> {
    if !is_pem(encoded) {
        return parse_private_der(encoded);
    }
    let blocks = parse_many(encoded)
        .map_err(|e| Error::InvalidKeyFormat(format!("pem parse error: {e}")))?;
    for block in blocks {
        match block.tag() {
            "RSA PRIVATE KEY" => return parse_rsa_private_pkcs1(block.contents()),
            "PRIVATE KEY" => return parse_private_pkcs8(block.contents()),
            "EC PRIVATE KEY" => return Err(Error::UnsupportedKeyType("EC".to_string())),
            "ENCRYPTED PRIVATE KEY" => {
                return Err(Error::InvalidKeyFormat(
                    "encrypted private keys are not supported".to_string(),
                ))
            }
            tag if PUBLIC_TAGS.contains(&tag) => return Err(role_mismatch("private", "public")),
            _ => {}
        }
    }
    Err(Error::InvalidKeyFormat(
        "no private key pem block found".to_string(),
    ))
}

fn is_pem(encoded: &[u8]) -> bool {
    let start = encoded
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(encoded.len());
    encoded[start..].starts_with(b"-----BEGIN ")
}

fn parse_public_der(der: &[u8]) -> Result<RsaPublicKey, Error> {
    if SubjectPublicKeyInfoRef::try_from(der).is_ok() {
        return parse_public_spki(der);
    }
    if let Ok(key) = RsaPublicKey::from_pkcs1_der(der) {
        return Ok(key);
    }
    if PrivateKeyInfo::try_from(der).is_ok() || RsaPrivateKey::from_pkcs1_der(der).is_ok() {
        return Err(role_mismatch("public", "private"));
    }
    Err(Error::InvalidKeyFormat(
        "unrecognized public key encoding".to_string(),
    ))
}

fn parse_private_der(der: &[u8]) -> Result<RsaPrivateKey, Error> {
    if PrivateKeyInfo::try_from(der).is_ok() {
        return parse_private_pkcs8(der);
    }
    if RsaPrivateKey::from_pkcs1_der(der).is_ok() {
        return parse_rsa_private_pkcs1(der);
    }
    if SubjectPublicKeyInfoRef::try_from(der).is_ok() || RsaPublicKey::from_pkcs1_der(der).is_ok()
    {
        return Err(role_mismatch("private", "public"));
    }
    Err(Error::InvalidKeyFormat(
        "unrecognized private key encoding".to_string(),
    ))
}

fn parse_rsa_public_pkcs1(der: &[u8]) -> Result<RsaPublicKey, Error> {
    RsaPublicKey::from_pkcs1_der(der)
        .map_err(|e| Error::InvalidKeyFormat(format!("rsa pkcs1 public key error: {e}")))
}

fn parse_public_spki(der: &[u8]) -> Result<RsaPublicKey, Error> {
    let spki = SubjectPublicKeyInfoRef::try_from(der)
        .map_err(|e| Error::InvalidKeyFormat(format!("spki public key error: {e}")))?;
    ensure_rsa_oid(spki.algorithm.oid)?;
    RsaPublicKey::from_public_key_der(der)
        .map_err(|e| Error::InvalidKeyFormat(format!("rsa spki public key error: {e}")))
}

fn parse_rsa_private_pkcs1(der: &[u8]) -> Result<RsaPrivateKey, Error> {
    let key = RsaPrivateKey::from_pkcs1_der(der)
        .map_err(|e| Error::InvalidKeyFormat(format!("rsa pkcs1 private key error: {e}")))?;
    validated(key)
}

fn parse_private_pkcs8(der: &[u8]) -> Result<RsaPrivateKey, Error> {
    let info = PrivateKeyInfo::try_from(der)
        .map_err(|e| Error::InvalidKeyFormat(format!("pkcs8 private key error: {e}")))?;
    ensure_rsa_oid(info.algorithm.oid)?;
    let key = RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| Error::InvalidKeyFormat(format!("rsa pkcs8 private key error: {e}")))?;
    validated(key)
}

fn validated(key: RsaPrivateKey) -> Result<RsaPrivateKey, Error> {
    key.validate()
        .map_err(|e| Error::InvalidKeyFormat(format!("rsa private key is inconsistent: {e}")))?;
    Ok(key)
}

fn ensure_rsa_oid(oid: ObjectIdentifier) -> Result<(), Error> {
    if oid == RSA_ENCRYPTION_OID {
        return Ok(());
    }
    let name = if oid == EC_PUBLIC_KEY_OID {
        "EC".to_string()
    } else if oid == ED25519_OID {
        "Ed25519".to_string()
    } else {
        format!("algorithm oid {oid}")
    };
    Err(Error::UnsupportedKeyType(name))
}

fn role_mismatch(expected: &str, found: &str) -> Error {
    Error::InvalidKeyFormat(format!("expected {expected} key, found {found} key"))
}
