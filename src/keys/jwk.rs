use crate::base64url;
use crate::error::Error;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use serde::Deserialize;
use serde_json::{json, Value};

const PRIVATE_JWK_MEMBERS: &[&str] = &["d", "p", "q", "dp", "dq", "qi", "oth"];

#[derive(Debug, Deserialize)]
struct RsaJwk {
    kty: String,
    n: Option<String>,
    e: Option<String>,
}

pub(super) fn public_key_from_jwk(jwk: &Value) -> Result<RsaPublicKey, Error> {
    let object = jwk
        .as_object()
        .ok_or_else(|| Error::InvalidKeyFormat("jwk must be a json object".to_string()))?;
    if PRIVATE_JWK_MEMBERS.iter().any(|name| object.contains_key(*name)) {
        return Err(Error::InvalidKeyFormat(
            "expected public key, found private jwk members".to_string(),
        ));
    }
    let parsed: RsaJwk = serde_json::from_value(jwk.clone())
        .map_err(|e| Error::InvalidKeyFormat(format!("jwk parse error: {e}")))?;
    if parsed.kty != "RSA" {
        return Err(Error::UnsupportedKeyType(parsed.kty));
    }
    let n = decode_member("n", parsed.n.as_deref())?;
    let e = decode_member("e", parsed.e.as_deref())?;
    RsaPublicKey::new(BigUint::from_bytes_be(&n), BigUint::from_bytes_be(&e))
        .map_err(|err| Error::InvalidKeyFormat(format!("rsa jwk error: {err}")))
}

pub(super) fn public_key_to_jwk(key: &RsaPublicKey) -> Value {
    json!({
        "kty": "RSA",
        "n": base64url::encode(&key.n().to_bytes_be()),
        "e": base64url::encode(&key.e().to_bytes_be()),
    })
}

fn decode_member(name: &str, value: Option<&str>) -> Result<Vec<u8>, Error> {
    let value =
        value.ok_or_else(|| Error::InvalidKeyFormat(format!("jwk is missing member {name}")))?;
    let bytes = base64url::decode(value)
        .map_err(|e| Error::InvalidKeyFormat(format!("jwk member {name}: {e}")))?;
    if bytes.is_empty() {
        return Err(Error::InvalidKeyFormat(format!("jwk member {name} is empty")));
    }
    Ok(bytes)
}
