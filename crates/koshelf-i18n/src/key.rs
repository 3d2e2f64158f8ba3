//! Message key parsing

/// Separator between a message id and an attribute name.
pub const ATTRIBUTE_SEPARATOR: char = '.';

/// A lookup key split into message id and optional attribute.
///
/// Only the first separator splits: `share.recap.label` addresses the
/// attribute `recap.label` of message `share`. A trailing separator with
/// nothing after it (`foo.`) requests the message value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageKey<'a> {
    /// Message identifier
    pub id: &'a str,
    /// Attribute identifier, when a non-empty one follows the separator
    pub attribute: Option<&'a str>,
}

impl<'a> MessageKey<'a> {
    /// Split `key` at the first separator
    pub fn parse(key: &'a str) -> Self {
        match key.split_once(ATTRIBUTE_SEPARATOR) {
            Some((id, attribute)) => Self {
                id,
                attribute: (!attribute.is_empty()).then_some(attribute),
            },
            None => Self {
                id: key,
                attribute: None,
            },
        }
    }
}
