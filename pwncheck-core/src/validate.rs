/// Minimum-length policy for secrets submitted to the password checker.
///
/// A usability guard against obviously-untypical inputs, not a security
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretPolicy {
    pub min_len: usize,
}

impl Default for SecretPolicy {
    fn default() -> Self {
        Self { min_len: 4 }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("password is empty")]
    Empty,

    #[error("password must be at least {min} characters long")]
    TooShort { min: usize },
}

impl SecretPolicy {
    pub fn check(&self, secret: &str) -> Result<(), PolicyError> {
        if secret.is_empty() {
            return Err(PolicyError::Empty);
        }
        if secret.chars().count() < self.min_len {
            return Err(PolicyError::TooShort { min: self.min_len });
        }
        Ok(())
    }
}

/// Permissive email shape check: non-empty local part, `@`, and a domain
/// whose last dot separates two non-empty labels, with no whitespace and no
/// second `@` anywhere. Anything stricter belongs upstream.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let sane = |part: &str| {
        !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@')
    };
    sane(local) && sane(host) && sane(tld)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_accepts_four_chars() {
        let policy = SecretPolicy::default();
        assert_eq!(policy.check("abcd"), Ok(()));
    }

    #[test]
    fn default_policy_rejects_empty_and_short() {
        let policy = SecretPolicy::default();
        assert_eq!(policy.check(""), Err(PolicyError::Empty));
        assert_eq!(policy.check("abc"), Err(PolicyError::TooShort { min: 4 }));
    }

    #[test]
    fn policy_counts_chars_not_bytes() {
        let policy = SecretPolicy::default();
        // four codepoints, more than four bytes
        assert_eq!(policy.check("äöüß"), Ok(()));
    }

    #[test]
    fn custom_minimum_is_honored() {
        let policy = SecretPolicy { min_len: 8 };
        assert_eq!(policy.check("1234567"), Err(PolicyError::TooShort { min: 8 }));
        assert_eq!(policy.check("12345678"), Ok(()));
    }

    #[test]
    fn accepts_plausible_emails() {
        for email in [
            "user@example.com",
            "first.last@sub.example.co.uk",
            "u+tag@example.io",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "not-an-email",
            "user@",
            "@domain.com",
            "user@domain",
            "user@domain.",
            "user@.com",
            "user@@example.com",
            "user @example.com",
            "user@exam ple.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }
}
