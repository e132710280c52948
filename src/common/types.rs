use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::Result;
use crate::common::verify::verify_key_pair;

/// A public/private key pair that can be used for SSH access.
///
/// `public_key` holds an OpenSSH authorized-keys line and `private_key` a
/// PKCS#1 PEM block. Pairs built by generation always match; pairs loaded
/// from disk are taken as-is.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    public_key: String,
    private_key: String,
}

impl KeyPair {
    pub(crate) fn new(public_key: String, private_key: String) -> Self {
        Self {
            public_key,
            private_key,
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Returns `(public_key, private_key)`.
    pub fn into_parts(self) -> (String, String) {
        (self.public_key, self.private_key)
    }

    /// Whether the public half belongs to the private half.
    pub fn is_consistent(&self) -> Result<bool> {
        verify_key_pair(self)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_private_key() {
        let pair = KeyPair::new("ssh-rsa AAAA\n".to_string(), "super secret".to_string());
        let debug = format!("{:?}", pair);

        assert!(debug.contains("ssh-rsa AAAA"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("super secret"));
    }

    #[test]
    fn test_json_field_names() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let pair = KeyPair::new("hello".to_string(), "world".to_string());
        let json = serde_json::to_value(&pair)?;

        assert_eq!(json["public_key"], "hello");
        assert_eq!(json["private_key"], "world");

        let back: KeyPair = serde_json::from_value(json)?;
        assert_eq!(back, pair);
        Ok(())
    }

    #[test]
    fn test_into_parts() {
        let pair = KeyPair::new("pub".to_string(), "priv".to_string());
        assert_eq!(pair.into_parts(), ("pub".to_string(), "priv".to_string()));
    }
}
