// Term Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup key of a term (unique within the collection)
pub type Keyword = String;

/// Validate a keyword taken from a request
pub fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.is_empty() {
        return Err(DomainError::EmptyKeyword);
    }
    Ok(())
}

/// Absolute http(s) URL pointing at the source of a definition.
///
/// The text is kept exactly as supplied; parsing only validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceLink(String);

impl SourceLink {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let invalid = |reason: String| DomainError::InvalidSourceLink {
            value: value.clone(),
            reason,
        };

        // Url::parse strips tabs, newlines and surrounding spaces; the stored
        // text must be exactly what was validated
        if value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(invalid(
                "URL must not contain whitespace or control characters".to_string(),
            ));
        }

        let url = url::Url::parse(&value).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "scheme '{}' is not supported, expected http or https",
                url.scheme()
            )));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("URL has no host".to_string()));
        }

        Ok(Self(value))
    }

    /// Parse an optional wire value; an empty string means "no link"
    pub fn parse_optional(value: Option<String>) -> Result<Option<Self>> {
        match value {
            Some(v) if !v.is_empty() => Self::parse(v).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SourceLink {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<SourceLink> for String {
    fn from(link: SourceLink) -> Self {
        link.0
    }
}

impl fmt::Display for SourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Term Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub title: String,
    pub definition: String,
    #[serde(default)]
    pub source_link: Option<SourceLink>,
}

impl Term {
    pub fn new(
        title: impl Into<String>,
        definition: impl Into<String>,
        source_link: Option<SourceLink>,
    ) -> Self {
        Self {
            title: title.into(),
            definition: definition.into(),
            source_link,
        }
    }

    /// Apply a validated update in place. `title` is never touched.
    pub fn apply(&mut self, update: TermUpdate) {
        if let Some(definition) = update.definition {
            self.definition = definition;
        }
        if let Some(source_link) = update.source_link {
            self.source_link = source_link;
        }
    }
}

/// Validated partial update of a term
///
/// `None` leaves the stored field untouched. For `source_link`,
/// `Some(None)` clears the link and `Some(Some(_))` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermUpdate {
    pub definition: Option<String>,
    pub source_link: Option<Option<SourceLink>>,
}

impl TermUpdate {
    pub fn is_empty(&self) -> bool {
        self.definition.is_none() && self.source_link.is_none()
    }
}
