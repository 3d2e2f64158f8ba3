//! Recap page: year navigation and timeline ordering.

use crate::storage::{keys, KeyValueStore, KeyValueStoreExt};
use koshelf_common::Result;
use koshelf_i18n::{LocaleSource, Translator};
use tracing::debug;

/// Scope value meaning every book type.
pub const ALL_SCOPE: &str = "all";

/// Path of the recap for `year`, keeping the current scope.
///
/// A missing, empty or `all` scope maps to `/recap/<year>/`.
pub fn recap_year_path(year: i32, scope: Option<&str>) -> String {
    match scope {
        None | Some("" | ALL_SCOPE) => format!("/recap/{year}/"),
        Some(scope) => format!("/recap/{year}/{scope}/"),
    }
}

/// Timeline direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent month on top.
    #[default]
    NewestFirst,
    /// Earliest month on top.
    OldestFirst,
}

impl SortOrder {
    /// The stored boolean form.
    pub const fn from_newest_first(newest_first: bool) -> Self {
        if newest_first {
            Self::NewestFirst
        } else {
            Self::OldestFirst
        }
    }

    /// Whether this is [`SortOrder::NewestFirst`].
    pub const fn is_newest_first(self) -> bool {
        matches!(self, Self::NewestFirst)
    }

    /// The other direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::NewestFirst => Self::OldestFirst,
            Self::OldestFirst => Self::NewestFirst,
        }
    }

    /// Translation key of the toggle label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::NewestFirst => "sort-order.newest-first",
            Self::OldestFirst => "sort-order.oldest-first",
        }
    }
}

/// One month of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<T> {
    /// Month title, always rendered first.
    pub header: String,
    /// Entries below the header.
    pub items: Vec<T>,
}

impl<T> MonthGroup<T> {
    /// A group with the given header and items.
    pub fn new(header: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            header: header.into(),
            items,
        }
    }
}

/// Month groups in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<T> {
    /// Groups top to bottom.
    pub groups: Vec<MonthGroup<T>>,
}

impl<T> Timeline<T> {
    /// A timeline over `groups`.
    pub const fn new(groups: Vec<MonthGroup<T>>) -> Self {
        Self { groups }
    }

    /// Reverse group order and the items of each group. Headers stay on top.
    pub fn flip(&mut self) {
        self.groups.reverse();
        for group in &mut self.groups {
            group.items.reverse();
        }
    }
}

/// The sort button of the recap page.
#[derive(Debug)]
pub struct SortToggle<S> {
    store: S,
    order: SortOrder,
}

impl<S: KeyValueStore> SortToggle<S> {
    /// Read the stored preference, newest first when unset.
    pub fn new(store: S) -> Self {
        let newest_first = store.get_or(keys::RECAP_SORT_NEWEST, true);
        Self {
            store,
            order: SortOrder::from_newest_first(newest_first),
        }
    }

    /// Current direction.
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Bring a timeline rendered newest first into the stored order.
    pub fn apply_initial<T>(&self, timeline: &mut Timeline<T>) {
        if !self.order.is_newest_first() {
            timeline.flip();
        }
    }

    /// Invert the direction, persist it and flip `timeline`.
    pub fn toggle<T>(&mut self, timeline: &mut Timeline<T>) -> Result<SortOrder> {
        self.order = self.order.reversed();
        self.store
            .set(keys::RECAP_SORT_NEWEST, &self.order.is_newest_first())?;
        timeline.flip();

        debug!(order = ?self.order, "Recap sort order changed");
        Ok(self.order)
    }

    /// Localized button title for the current direction.
    pub fn label<L: LocaleSource>(&self, translator: &Translator<L>) -> String {
        translator.get(self.order.label_key())
    }
}
