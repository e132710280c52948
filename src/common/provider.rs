use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use ssh_key::rand_core::CryptoRngCore;

use crate::common::encode::{encode_authorized_key, encode_private_key_pem};
use crate::common::error::{Error, Result};
use crate::common::types::KeyPair;

/// Generates an RSA key pair of `key_size` bits using the operating system's
/// secure random source.
pub fn generate_rsa_key_pair(key_size: usize) -> Result<KeyPair> {
    let mut rng = OsRng;
    generate_rsa_key_pair_with_rng(&mut rng, key_size)
}

/// Generates an RSA key pair of `key_size` bits, drawing randomness from `rng`.
///
/// No lower bound is applied here: sizes the RSA primitive rejects come back
/// as [`Error::KeyGeneration`].
pub fn generate_rsa_key_pair_with_rng<R>(rng: &mut R, key_size: usize) -> Result<KeyPair>
where
    R: CryptoRngCore + ?Sized,
{
    tracing::info!("Generating new public/private key of size {}", key_size);

    let private_key = RsaPrivateKey::new(rng, key_size).map_err(Error::KeyGeneration)?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_pem = encode_private_key_pem(&private_key)?;
    let authorized_key = encode_authorized_key(&public_key)?;

    Ok(KeyPair::new(authorized_key, private_pem))
}

/// Reads an existing key pair from disk.
///
/// Both files are taken verbatim; nothing checks that they hold keys, or that
/// the two halves belong together.
pub fn load_rsa_key_pair(
    public_key_path: impl AsRef<Path>,
    private_key_path: impl AsRef<Path>,
) -> Result<KeyPair> {
    let public_key = read_key_file(public_key_path.as_ref())?;
    let private_key = read_key_file(private_key_path.as_ref())?;

    Ok(KeyPair::new(public_key, private_key))
}

fn read_key_file(path: &Path) -> Result<String> {
    tracing::debug!("Reading key file {}", path.display());
    fs::read_to_string(path).map_err(|e| Error::read(path.to_path_buf(), e))
}
