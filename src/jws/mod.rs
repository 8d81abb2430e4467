mod options;
mod parts;
mod signer;
mod verifier;


pub use options::{JwsLimits, JwsVerifyOptions, DEFAULT_MAX_DECODED_BYTES};
pub use signer::{sign, JwsSigner};
pub use verifier::{decode_unverified, verify, JwsVerifier, UnverifiedJws, VerifiedJws};
