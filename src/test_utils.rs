use std::path::Path;

use crate::common::provider::{generate_rsa_key_pair, load_rsa_key_pair};
use crate::common::types::KeyPair;

/// Generates a key pair, panicking on failure. Meant for test harnesses that
/// abort on any setup error.
pub fn generate_rsa_key_pair_or_panic(key_size: usize) -> KeyPair {
    match generate_rsa_key_pair(key_size) {
        Ok(pair) => pair,
        Err(e) => panic!("{}", e),
    }
}

/// Loads a key pair from disk, panicking on failure.
pub fn load_rsa_key_pair_or_panic(
    public_key_path: impl AsRef<Path>,
    private_key_path: impl AsRef<Path>,
) -> KeyPair {
    match load_rsa_key_pair(public_key_path, private_key_path) {
        Ok(pair) => pair,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_generate_or_panic() {
        let pair = generate_rsa_key_pair_or_panic(1024);
        assert!(pair.public_key().starts_with("ssh-rsa "));
    }

    #[test]
    #[should_panic(expected = "failed to generate RSA key")]
    fn test_generate_or_panic_aborts() {
        generate_rsa_key_pair_or_panic(8);
    }

    #[test]
    fn test_load_or_panic() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.pub"), "hello").unwrap();
        fs::write(dir.path().join("a"), "world").unwrap();

        let pair = load_rsa_key_pair_or_panic(dir.path().join("a.pub"), dir.path().join("a"));

        assert_eq!(pair.public_key(), "hello");
        assert_eq!(pair.private_key(), "world");
    }

    #[test]
    #[should_panic(expected = "key file not found")]
    fn test_load_or_panic_aborts() {
        let dir = tempdir().unwrap();
        load_rsa_key_pair_or_panic(dir.path().join("nope.pub"), dir.path().join("nope"));
    }
}
