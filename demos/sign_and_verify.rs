use jws_rs::{
    sign, Algorithm, HeaderParams, JwsVerifier, JwsVerifyOptions, PrivateKey, PublicKey,
};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let private_key_path = match env::var("JWS_PRIVATE_KEY_PEM") {
        Ok(value) => value,
        Err(_) => {
            eprintln!("JWS_PRIVATE_KEY_PEM is not set. Skipping.");
            eprintln!("Example: JWS_PRIVATE_KEY_PEM=/path/private.pem");
            return Ok(());
        }
    };
    let public_key_path = match env::var("JWS_PUBLIC_KEY_PEM") {
        Ok(value) => value,
        Err(_) => {
            eprintln!("JWS_PUBLIC_KEY_PEM is not set. Skipping.");
            eprintln!("Example: JWS_PUBLIC_KEY_PEM=/path/public.pem");
            return Ok(());
        }
    };

    let private_key = PrivateKey::parse(&fs::read(private_key_path)?)?;
    let public_key = PublicKey::parse(&fs::read(public_key_path)?)?;

    let header = HeaderParams::new(Algorithm::RS256);
    let token = sign(&header, br#"{"iss":"fsdfs"}"#, &private_key)?;
    println!("{token}");

    let verifier = JwsVerifier::new(public_key, JwsVerifyOptions::new([Algorithm::RS256]));
    match verifier.verify_and_decode(&token)? {
        Some(verified) => println!(
            "verified: true, payload: {}",
            String::from_utf8_lossy(&verified.payload)
        ),
        None => println!("verified: false"),
    }
    Ok(())
}
