//! Variables passed to message formatting

use fluent_bundle::{FluentArgs, FluentValue};
use std::collections::{BTreeMap, HashMap};

/// Name used by the numeric shorthand.
pub const COUNT_ARG: &str = "count";

/// A single variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Numeric value, eligible for plural selection
    Number(f64),
    /// Plain string value
    String(String),
}

impl ArgValue {
    fn to_fluent(&self) -> FluentValue<'_> {
        match self {
            Self::Number(n) => FluentValue::from(*n),
            Self::String(s) => FluentValue::from(s.as_str()),
        }
    }
}

macro_rules! number_conversions {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ArgValue {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }

            impl From<$ty> for TranslationArgs {
                fn from(value: $ty) -> Self {
                    Self::count(value)
                }
            }
        )+
    };
}

number_conversions!(i32, i64, f64);

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Named variables for a lookup.
///
/// A bare number converts into a single `count` variable, so
/// `translator.get_with("items-count", 3)` and
/// `translator.get_with("items-count", translation_args!["count" => 3])`
/// format identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationArgs {
    values: BTreeMap<String, ArgValue>,
}

impl TranslationArgs {
    /// No variables
    pub fn new() -> Self {
        Self::default()
    }

    /// The numeric shorthand: one variable named `count`
    pub fn count(value: impl Into<ArgValue>) -> Self {
        Self::new().with(COUNT_ARG, value)
    }

    /// Add or replace a variable, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Whether no variables are set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Borrow the variables as Fluent arguments, `None` when empty
    pub fn to_fluent(&self) -> Option<FluentArgs<'_>> {
        if self.values.is_empty() {
            return None;
        }

        let mut args = FluentArgs::new();
        for (name, value) in &self.values {
            args.set(name.as_str(), value.to_fluent());
        }
        Some(args)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for TranslationArgs
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for TranslationArgs
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationArgs
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}

/// Build [`TranslationArgs`] from `name => value` pairs
#[macro_export]
macro_rules! translation_args {
    () => {
        $crate::TranslationArgs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::TranslationArgs::new();
        $(
            args.set($key, $value);
        )+
        args
    }};
}
