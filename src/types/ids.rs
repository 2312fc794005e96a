// src/types/ids.rs
use super::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Identifier of a Confluence page, passed to the `ptpage(id:)` query.
///
/// Confluence ids are numeric today but the GraphQL schema types them as
/// `ID`, so only shape is checked here: non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptyField("pageId"));
        }

        if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::InvalidPageId(format!(
                "page id must not contain whitespace: {:?}",
                input
            )));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        let id = PageId::parse("123456789").unwrap();
        assert_eq!(id.as_str(), "123456789");
        assert_eq!(id.to_string(), "123456789");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(
            PageId::parse("").unwrap_err(),
            ValidationError::EmptyField("pageId")
        );
        assert!(PageId::parse("12 34").is_err());
        assert!(PageId::parse("1234\n").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = PageId::parse("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
