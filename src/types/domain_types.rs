// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use crate::constants::{ATLASSIAN_HOST_SUFFIX, DNS_LABEL_MAX_LEN};
use base64::{engine::general_purpose, Engine as _};
use std::fmt;

/// An Atlassian Cloud site name, the `acme` in `acme.atlassian.net`.
///
/// Validated as a single DNS label so it can be spliced into a host name
/// without producing a different host. The value is otherwise kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    pub fn new(domain: impl Into<String>) -> Result<Self, ValidationError> {
        let domain = domain.into();
        let invalid = |reason: &str| ValidationError::InvalidDomain {
            domain: domain.clone(),
            reason: reason.to_string(),
        };

        if domain.is_empty() {
            return Err(ValidationError::EmptyField("domain"));
        }

        if domain.len() > DNS_LABEL_MAX_LEN {
            return Err(invalid("longer than a DNS label allows"));
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-';
        if !domain.chars().all(allowed) {
            return Err(invalid("only ASCII letters, digits and '-' are allowed"));
        }

        if domain.starts_with('-') || domain.ends_with('-') {
            return Err(invalid("must not start or end with '-'"));
        }

        Ok(Self(domain))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Site root, e.g. `https://acme.atlassian.net`.
    pub fn site_url(&self) -> String {
        format!("https://{}{}", self.0, ATLASSIAN_HOST_SUFFIX)
    }

    /// Base that every page's web path is appended to.
    pub fn wiki_base_url(&self) -> String {
        format!("{}/wiki", self.site_url())
    }

    /// The GraphQL endpoint serving the page tree.
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/cgraphql", self.site_url())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `email:api-token` pair used for Basic authentication.
///
/// Passed through untouched: the whole string is what gets base64-encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(credential: impl Into<String>) -> Result<Self, ValidationError> {
        let credential = credential.into();

        if credential.is_empty() {
            return Err(ValidationError::EmptyField("emailAndApiToken"));
        }

        if credential.chars().any(|c| c.is_control()) {
            return Err(ValidationError::InvalidCredential {
                reason: "control characters are not allowed".to_string(),
            });
        }

        Ok(Self(credential))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(self.0.as_bytes()))
    }
}

// Redacted so the token never reaches a log line.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self)
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once(':') {
            Some((email, _)) => write!(f, "{}:***", email),
            None => write!(f, "***"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_validation() {
        assert!(Domain::new("acme").is_ok());
        assert!(Domain::new("acme-corp").is_ok());
        assert!(Domain::new("Acme42").is_ok());
        assert_eq!(
            Domain::new("").unwrap_err(),
            ValidationError::EmptyField("domain")
        );
        assert!(Domain::new("acme.evil.com").is_err());
        assert!(Domain::new("-acme").is_err());
        assert!(Domain::new("acme-").is_err());
        assert!(Domain::new("ac me").is_err());
        assert!(Domain::new("a".repeat(64)).is_err());
    }

    #[test]
    fn test_domain_urls() {
        let domain = Domain::new("acme").unwrap();
        assert_eq!(domain.site_url(), "https://acme.atlassian.net");
        assert_eq!(domain.wiki_base_url(), "https://acme.atlassian.net/wiki");
        assert_eq!(
            domain.graphql_endpoint(),
            "https://acme.atlassian.net/cgraphql"
        );
    }

    #[test]
    fn test_credential_basic_auth_header() {
        let credential = Credential::new("me@acme.com:token123").unwrap();
        assert_eq!(
            credential.basic_auth_header(),
            "Basic bWVAYWNtZS5jb206dG9rZW4xMjM="
        );
    }

    #[test]
    fn test_credential_is_redacted() {
        let credential = Credential::new("me@acme.com:token123").unwrap();
        assert_eq!(credential.to_string(), "me@acme.com:***");
        assert!(!format!("{:?}", credential).contains("token123"));

        let bare = Credential::new("justatoken").unwrap();
        assert_eq!(bare.to_string(), "***");
    }

    #[test]
    fn test_credential_validation() {
        assert!(Credential::new("").is_err());
        assert!(Credential::new("me@acme.com:tok\nen").is_err());
    }
}
