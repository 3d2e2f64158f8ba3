//! Locale descriptor served at `/assets/json/locales.json`

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// A locale identifier plus the ordered FTL sources for that locale.
///
/// Resources arrive in priority order: a regional override first, then the
/// base language, then the English fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDescriptor {
    /// BCP 47 language tag, e.g. `pt-BR`
    pub language: String,
    /// Raw Fluent resource texts
    pub resources: Vec<String>,
}

impl LocaleDescriptor {
    /// Create a descriptor from a language tag and resource texts
    pub fn new<I, S>(language: impl Into<String>, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language: language.into(),
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }

    /// Decode and validate a descriptor from its JSON body
    pub fn from_json(body: &str) -> I18nResult<Self> {
        let descriptor: Self = serde_json::from_str(body)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check the fields serde cannot: a usable language tag
    pub fn validate(&self) -> I18nResult<()> {
        if self.language.trim().is_empty() {
            return Err(I18nError::InvalidDescriptor(
                "language must not be empty".to_string(),
            ));
        }
        self.language_identifier().map(|_| ())
    }

    /// Parse the language tag
    pub fn language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.language
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.language.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_accepts_backend_shape() {
        let descriptor =
            LocaleDescriptor::from_json(r#"{"language":"pt-BR","resources":["greeting = Olá"]}"#)
                .unwrap();
        assert_eq!(descriptor, LocaleDescriptor::new("pt-BR", ["greeting = Olá"]));
    }

    #[test]
    fn test_empty_resource_list_is_valid() {
        let descriptor = LocaleDescriptor::from_json(r#"{"language":"en","resources":[]}"#).unwrap();
        assert!(descriptor.resources.is_empty());
    }

    #[test]
    fn test_missing_resources_is_rejected() {
        let err = LocaleDescriptor::from_json(r#"{"language":"en"}"#).unwrap_err();
        assert!(matches!(err, I18nError::Decode(_)));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(LocaleDescriptor::from_json(r#"{"language":7,"resources":[]}"#).is_err());
        assert!(LocaleDescriptor::from_json(r#"{"language":"en","resources":[1]}"#).is_err());
        assert!(LocaleDescriptor::from_json(r#"{"language":"en","resources":"a = b"}"#).is_err());
        assert!(LocaleDescriptor::from_json("[]").is_err());
    }

    #[test]
    fn test_blank_language_is_rejected() {
        let err = LocaleDescriptor::from_json(r#"{"language":"  ","resources":[]}"#).unwrap_err();
        assert!(matches!(err, I18nError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let err =
            LocaleDescriptor::from_json(r#"{"language":"not a tag","resources":[]}"#).unwrap_err();
        assert!(matches!(err, I18nError::InvalidLanguageId(_)));
    }
}
