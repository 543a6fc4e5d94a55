use std::fmt;

use serde::{Serialize, Serializer};

pub const PRIMARY_SIGNER_VAR: &str = "PRIVATE_KEY_1";
pub const SECONDARY_SIGNER_VAR: &str = "PRIVATE_KEY_2";

/// Raw signer key as read from the environment. Never printed through `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SignerKey(String);

impl SignerKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Short fingerprint safe to show in logs and API responses.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return "*".repeat(chars.len().max(1));
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

impl fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerKey({})", self.masked())
    }
}

impl Serialize for SignerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignerRole {
    Primary,
    Secondary,
}

impl SignerRole {
    pub fn variable(self) -> &'static str {
        match self {
            SignerRole::Primary => PRIMARY_SIGNER_VAR,
            SignerRole::Secondary => SECONDARY_SIGNER_VAR,
        }
    }
}

/// Snapshot of the two signer slots shared by every network.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub primary: Option<SignerKey>,
    pub secondary: Option<SignerKey>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            primary: lookup(PRIMARY_SIGNER_VAR).map(SignerKey::new),
            secondary: lookup(SECONDARY_SIGNER_VAR).map(SignerKey::new),
        }
    }

    pub fn get(&self, role: SignerRole) -> Option<&SignerKey> {
        match role {
            SignerRole::Primary => self.primary.as_ref(),
            SignerRole::Secondary => self.secondary.as_ref(),
        }
    }

    /// Ordered account slots, primary first.
    pub fn accounts(&self) -> Vec<Option<SignerKey>> {
        vec![self.primary.clone(), self.secondary.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_slots_through_lookup() {
        let creds = Credentials::from_lookup(|name| match name {
            PRIMARY_SIGNER_VAR => Some("0xAAA".to_string()),
            SECONDARY_SIGNER_VAR => Some("0xBBB".to_string()),
            _ => None,
        });

        assert_eq!(
            creds.accounts(),
            vec![Some(SignerKey::new("0xAAA")), Some(SignerKey::new("0xBBB"))]
        );
    }

    #[test]
    fn unset_variables_leave_empty_slots() {
        let creds = Credentials::from_lookup(|_| None);
        assert_eq!(creds.accounts(), vec![None, None]);
        assert!(creds.get(SignerRole::Primary).is_none());
    }

    #[test]
    fn empty_value_counts_as_present() {
        let creds = Credentials::from_lookup(|name| {
            (name == SECONDARY_SIGNER_VAR).then(String::new)
        });
        assert_eq!(creds.secondary, Some(SignerKey::new("")));
        assert!(creds.primary.is_none());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let key = SignerKey::new("0x0123456789abcdef0123456789abcdef");
        let printed = format!("{:?}", key);
        assert!(!printed.contains("456789abcdef0123"));
        assert_eq!(key.masked(), "0x01…cdef");
    }

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(SignerKey::new("K1").masked(), "**");
        assert_eq!(SignerKey::new("").masked(), "*");
    }
}
