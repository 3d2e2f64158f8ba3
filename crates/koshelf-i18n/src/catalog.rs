//! FluentBundle ownership and message formatting

use crate::args::TranslationArgs;
use crate::descriptor::LocaleDescriptor;
use crate::error::{I18nError, I18nResult};
use crate::key::MessageKey;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentError, FluentResource};
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// An immutable set of messages for one locale.
///
/// Uses the concurrent memoizer so a catalog can be shared between tasks.
/// When several resources define the same message id, the earliest resource
/// wins and later definitions are ignored.
pub struct Catalog {
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("locales", &self.bundle.locales)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// A catalog with no messages
    pub fn empty(locale: LanguageIdentifier) -> Self {
        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        // Plain output, no FSI/PDI marks around placeables
        bundle.set_use_isolating(false);
        Self { bundle }
    }

    /// Build a catalog from a validated descriptor
    pub fn from_descriptor(descriptor: &LocaleDescriptor) -> I18nResult<Self> {
        Self::from_resources(descriptor.language_identifier()?, &descriptor.resources)
    }

    /// Parse and add each resource in order; any parse error fails the whole catalog
    pub fn from_resources<S: AsRef<str>>(
        locale: LanguageIdentifier,
        resources: &[S],
    ) -> I18nResult<Self> {
        let mut catalog = Self::empty(locale);

        for (index, source) in resources.iter().enumerate() {
            let resource = FluentResource::try_new(source.as_ref().to_string()).map_err(
                |(_, errors)| I18nError::FluentParseError {
                    index,
                    errors: errors.iter().map(|e| format!("{e:?}")).collect(),
                },
            )?;

            if let Err(errors) = catalog.bundle.add_resource(resource) {
                for error in errors {
                    if let FluentError::Overriding { kind, id } = &error {
                        debug!(index, kind = ?kind, id = %id, "Keeping earlier definition");
                    } else {
                        debug!(index, error = ?error, "Resource added with errors");
                    }
                }
            }
        }

        debug!(
            locale = %catalog.language(),
            resources = resources.len(),
            "Built translation catalog"
        );
        Ok(catalog)
    }

    /// Primary locale as a BCP 47 tag
    pub fn language(&self) -> String {
        self.bundle
            .locales
            .first()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Resolve `key` (optionally `message.attribute`) and format it
    pub fn format(&self, key: &str, args: &TranslationArgs) -> I18nResult<String> {
        let parsed = MessageKey::parse(key);

        let message =
            self.bundle
                .get_message(parsed.id)
                .ok_or_else(|| I18nError::MessageNotFound {
                    key: key.to_string(),
                })?;

        let pattern = match parsed.attribute {
            Some(attribute) => message
                .get_attribute(attribute)
                .map(|attr| attr.value())
                .ok_or_else(|| I18nError::AttributeNotFound {
                    key: parsed.id.to_string(),
                    attribute: attribute.to_string(),
                })?,
            None => message.value().ok_or_else(|| I18nError::MissingValue {
                key: key.to_string(),
            })?,
        };

        let fluent_args = args.to_fluent();
        let mut errors = Vec::new();
        let formatted = self
            .bundle
            .format_pattern(pattern, fluent_args.as_ref(), &mut errors);

        if !errors.is_empty() {
            return Err(I18nError::MessageFormatError {
                key: key.to_string(),
                errors: errors.iter().map(|e| format!("{e:?}")).collect(),
            });
        }

        Ok(formatted.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation_args;

    fn catalog(resources: &[&str]) -> Catalog {
        Catalog::from_resources("en-US".parse().unwrap(), resources).unwrap()
    }

    #[test]
    fn test_value_and_attribute() {
        let catalog = catalog(&["foo = Foo\n    .bar = Bar"]);
        let none = TranslationArgs::new();

        assert_eq!(catalog.format("foo", &none).unwrap(), "Foo");
        assert_eq!(catalog.format("foo.bar", &none).unwrap(), "Bar");
        assert_eq!(catalog.format("foo.", &none).unwrap(), "Foo");
        assert!(matches!(
            catalog.format("foo.missing", &none),
            Err(I18nError::AttributeNotFound { .. })
        ));
    }

    #[test]
    fn test_message_without_value() {
        let catalog = catalog(&["sort-order =\n    .newest-first = Newest first"]);
        assert!(matches!(
            catalog.format("sort-order", &TranslationArgs::new()),
            Err(I18nError::MissingValue { .. })
        ));
        assert_eq!(
            catalog
                .format("sort-order.newest-first", &TranslationArgs::new())
                .unwrap(),
            "Newest first"
        );
    }

    #[test]
    fn test_first_resource_wins() {
        let catalog = catalog(&["a = First", "a = Second\nb = Only"]);
        assert_eq!(catalog.format("a", &TranslationArgs::new()).unwrap(), "First");
        assert_eq!(catalog.format("b", &TranslationArgs::new()).unwrap(), "Only");
    }

    #[test]
    fn test_parse_error_fails_catalog() {
        let result = Catalog::from_resources("en-US".parse().unwrap(), &["ok = fine", "= broken"]);
        assert!(matches!(
            result,
            Err(I18nError::FluentParseError { index: 1, .. })
        ));
    }

    #[test]
    fn test_plural_selection() {
        let catalog = catalog(&[
            "items = { $count ->\n    [one] One item\n   *[other] { $count } items\n}",
        ]);
        assert_eq!(
            catalog.format("items", &TranslationArgs::from(1)).unwrap(),
            "One item"
        );
        assert_eq!(
            catalog.format("items", &TranslationArgs::from(5)).unwrap(),
            "5 items"
        );
    }

    #[test]
    fn test_missing_variable_is_format_error() {
        let catalog = catalog(&["welcome = Welcome, { $name }!"]);
        assert!(matches!(
            catalog.format("welcome", &TranslationArgs::new()),
            Err(I18nError::MessageFormatError { .. })
        ));
        assert_eq!(
            catalog
                .format("welcome", &translation_args!["name" => "Ana"])
                .unwrap(),
            "Welcome, Ana!"
        );
    }

    #[test]
    fn test_language() {
        let catalog = Catalog::empty("pt-BR".parse().unwrap());
        assert_eq!(catalog.language(), "pt-BR");
        assert!(matches!(
            catalog.format("anything", &TranslationArgs::new()),
            Err(I18nError::MessageNotFound { .. })
        ));
    }
}
