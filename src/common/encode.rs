//! Key serialization: PKCS#1 PEM for private keys and the OpenSSH
//! authorized-keys line for public keys.

use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use ssh_key::public::{self, KeyData};
use ssh_key::PublicKey;

use crate::common::error::{Error, Result};

/// Algorithm name of RSA keys in the SSH wire format.
pub const SSH_RSA: &str = "ssh-rsa";

/// Encodes the private key as PKCS#1 DER inside an `RSA PRIVATE KEY` PEM block.
pub fn encode_private_key_pem(private_key: &RsaPrivateKey) -> Result<String> {
    let pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| Error::Encoding(format!("PKCS#1 PEM: {}", e)))?;
    Ok(pem.as_str().to_owned())
}

pub fn decode_private_key_pem(pem: &str) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .map_err(|e| Error::Decoding(format!("PKCS#1 PEM: {}", e)))
}

/// Converts the public key into its SSH representation.
pub fn ssh_public_key(public_key: &RsaPublicKey) -> Result<public::RsaPublicKey> {
    public::RsaPublicKey::try_from(public_key)
        .map_err(|e| Error::Encoding(format!("SSH public key: {}", e)))
}

/// Renders the public key as an `authorized_keys` entry, newline terminated,
/// without a comment.
pub fn encode_authorized_key(public_key: &RsaPublicKey) -> Result<String> {
    let key = PublicKey::from(KeyData::Rsa(ssh_public_key(public_key)?));
    let line = key
        .to_openssh()
        .map_err(|e| Error::Encoding(format!("authorized key: {}", e)))?;
    Ok(format!("{}\n", line))
}

/// Parses an `authorized_keys` entry. A trailing comment is ignored.
pub fn decode_authorized_key(line: &str) -> Result<public::RsaPublicKey> {
    let line = line.trim();
    let algorithm = line
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::Decoding("empty authorized key line".to_string()))?;
    if algorithm != SSH_RSA {
        return Err(Error::UnsupportedAlgorithm(algorithm.to_string()));
    }

    let key = PublicKey::from_openssh(line)
        .map_err(|e| Error::Decoding(format!("authorized key: {}", e)))?;
    match key.key_data() {
        KeyData::Rsa(rsa) => Ok(rsa.clone()),
        _ => Err(Error::UnsupportedAlgorithm(key.algorithm().as_str().to_string())),
    }
}
