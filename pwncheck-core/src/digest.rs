use compact_str::CompactString;
use sha1::{Digest, Sha1};

/// Hex length of a full SHA1 digest (160 bits).
pub const DIGEST_HEX_LEN: usize = 40;

/// Number of hex characters disclosed to the remote range endpoint.
pub const PREFIX_LEN: usize = 5;

/// Number of hex characters kept local (`DIGEST_HEX_LEN - PREFIX_LEN`).
pub const SUFFIX_LEN: usize = 35;

/// Hex lookup table. Uppercase is the range endpoint's convention.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// The k-anonymity split of a secret's SHA1 digest.
///
/// `prefix` is safe to put on the wire; `suffix` never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KAnonymitySplit {
    prefix: CompactString,
    suffix: CompactString,
}

impl KAnonymitySplit {
    /// Hashes the secret's UTF-8 bytes and splits the uppercase hex digest.
    pub fn of_secret(secret: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(secret.as_bytes());
        let hash: [u8; 20] = hasher.finalize().into();
        Self::of_digest(&hash)
    }

    /// Splits an already-computed raw digest.
    pub fn of_digest(hash: &[u8; 20]) -> Self {
        let mut hex = [0u8; DIGEST_HEX_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0F) as usize];
        }

        // hex is ASCII by construction
        let hex = std::str::from_utf8(&hex).unwrap();
        Self {
            prefix: CompactString::from(&hex[..PREFIX_LEN]),
            suffix: CompactString::from(&hex[PREFIX_LEN..]),
        }
    }

    /// The 5 hex characters sent to the range endpoint.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The 35 hex characters compared locally against the range response.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn known_digest_split() {
        // "password123" -> SHA1: CBFDAC6008F9CAB4083784CBD1874F76618D2A97
        let split = KAnonymitySplit::of_secret("password123");
        assert_eq!(split.prefix(), "CBFDA");
        assert_eq!(split.suffix(), "C6008F9CAB4083784CBD1874F76618D2A97");
    }

    #[test]
    fn split_from_raw_digest_matches_secret_path() {
        let digest = hex!("CBFDAC6008F9CAB4083784CBD1874F76618D2A97");
        assert_eq!(
            KAnonymitySplit::of_digest(&digest),
            KAnonymitySplit::of_secret("password123")
        );
    }

    #[test]
    fn split_is_deterministic() {
        let a = KAnonymitySplit::of_secret("correct horse battery staple");
        let b = KAnonymitySplit::of_secret("correct horse battery staple");
        assert_eq!(a, b);
    }

    #[test]
    fn split_lengths_are_fixed() {
        for secret in ["x", "1234", "a much longer secret with spaces", "päss🔑"] {
            let split = KAnonymitySplit::of_secret(secret);
            assert_eq!(split.prefix().len(), PREFIX_LEN);
            assert_eq!(split.suffix().len(), SUFFIX_LEN);
        }
    }

    #[test]
    fn digest_is_uppercase_hex() {
        let split = KAnonymitySplit::of_secret("hello");
        let all_upper_hex =
            |s: &str| s.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b));
        assert!(all_upper_hex(split.prefix()));
        assert!(all_upper_hex(split.suffix()));
    }
}
