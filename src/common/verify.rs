use rsa::RsaPublicKey;

use crate::common::encode::{decode_authorized_key, decode_private_key_pem, ssh_public_key};
use crate::common::error::Result;
use crate::common::types::KeyPair;

/// Checks that the public key of `pair` is the one embedded in its private key.
///
/// Returns `Ok(false)` for two well-formed halves that don't belong together,
/// and an error when either half fails to parse.
pub fn verify_key_pair(pair: &KeyPair) -> Result<bool> {
    let public_key = decode_authorized_key(pair.public_key())?;
    let private_key = decode_private_key_pem(pair.private_key())?;

    let matches = ssh_public_key(&RsaPublicKey::from(&private_key))? == public_key;
    if !matches {
        tracing::warn!("Public key does not match private key");
    }
    Ok(matches)
}
