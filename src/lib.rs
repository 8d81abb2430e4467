#![forbid(unsafe_code)]

mod algorithm;
mod base64url;
mod codec;
mod error;
mod jws;
mod keys;
mod primitive;
#[cfg(test)]
mod testdata;

pub use algorithm::{Algorithm, KeyFamily};
pub use base64url::{decode as base64url_decode, encode as base64url_encode};
pub use error::Error;

pub use codec::{
    decode_header, decode_payload, encode_header, encode_payload, HeaderParams, JwsHeader,
};

pub use keys::{parse_private_key, parse_public_key, Key, PrivateKey, PublicKey};

pub use primitive::{sign as sign_raw, verify as verify_raw};

pub use jws::{
    decode_unverified, sign, verify, JwsLimits, JwsSigner, JwsVerifier, JwsVerifyOptions,
    UnverifiedJws, VerifiedJws, DEFAULT_MAX_DECODED_BYTES,
};
