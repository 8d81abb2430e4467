use crate::algorithm::{Algorithm, KeyFamily};
use crate::error::Error;
use crate::keys::{PrivateKey, PublicKey};
use pkcs8::AssociatedOid;
use rsa::pkcs1v15::{
    Signature as RsaSignature, SigningKey as RsaSigningKey, VerifyingKey as RsaVerifyingKey,
};
use sha2::{Digest, Sha256, Sha384, Sha512};
use signature::{SignatureEncoding, Signer as SignatureSigner, Verifier as SignatureVerifier};

#[derive(Clone, Copy)]
enum RsaHash {
    Sha256,
    Sha384,
    Sha512,
}

/// Signs `signing_input` with RSASSA-PKCS1-v1_5. Deterministic for a given
/// key and input.
pub fn sign(alg: Algorithm, key: &PrivateKey, signing_input: &[u8]) -> Result<Vec<u8>, Error> {
    match rsa_hash(alg)? {
        RsaHash::Sha256 => sign_rsa::<Sha256>(key, signing_input),
        RsaHash::Sha384 => sign_rsa::<Sha384>(key, signing_input),
        RsaHash::Sha512 => sign_rsa::<Sha512>(key, signing_input),
    }
}

/// Checks an RSASSA-PKCS1-v1_5 signature. A signature that does not match,
/// including one of the wrong length, is `Ok(false)`; only an algorithm that
/// cannot be used with an RSA key is an error.
pub fn verify(
    alg: Algorithm,
    key: &PublicKey,
    signing_input: &[u8],
    signature: &[u8],
) -> Result<bool, Error> {
    let valid = match rsa_hash(alg)? {
        RsaHash::Sha256 => verify_rsa::<Sha256>(key, signing_input, signature),
        RsaHash::Sha384 => verify_rsa::<Sha384>(key, signing_input, signature),
        RsaHash::Sha512 => verify_rsa::<Sha512>(key, signing_input, signature),
    };
    Ok(valid)
}

fn rsa_hash(alg: Algorithm) -> Result<RsaHash, Error> {
    match (alg, alg.family()) {
        (Algorithm::RS256, _) => Ok(RsaHash::Sha256),
        (Algorithm::RS384, _) => Ok(RsaHash::Sha384),
        (Algorithm::RS512, _) => Ok(RsaHash::Sha512),
        (_, Some(KeyFamily::Ec)) => Err(Error::UnsupportedAlgorithm(format!(
            "{alg} requires an EC key, found RSA key"
        ))),
        _ => Err(Error::UnsupportedAlgorithm(format!(
            "{alg} is not a signature algorithm"
        ))),
    }
}

fn sign_rsa<D>(key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, Error>
where
    D: Digest + AssociatedOid,
{
    let signing_key = RsaSigningKey::<D>::new(key.rsa().clone());
    let sig = signing_key
        .try_sign(message)
        .map_err(|e| Error::Crypto(format!("rsa sign error: {e}")))?;
    Ok(sig.to_vec())
}

fn verify_rsa<D>(key: &PublicKey, message: &[u8], signature: &[u8]) -> bool
where
    D: Digest + AssociatedOid,
{
    if signature.len() != key.signature_len() {
        return false;
    }
    let Ok(sig) = RsaSignature::try_from(signature) else {
        return false;
    };
    let verifying_key = RsaVerifyingKey::<D>::new(key.rsa().clone());
    verifying_key.verify(message, &sig).is_ok()
}
