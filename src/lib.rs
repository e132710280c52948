//! RSA key pairs for SSH: generate a fresh pair encoded as an OpenSSH
//! authorized-keys line plus a PKCS#1 PEM private key, or load an existing
//! pair from disk.

pub mod common;
pub mod test_utils;

pub use common::error::{Error, Result};
pub use common::provider::{
    generate_rsa_key_pair, generate_rsa_key_pair_with_rng, load_rsa_key_pair,
};
pub use common::types::KeyPair;
pub use common::verify::verify_key_pair;
