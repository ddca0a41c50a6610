//! Which categories the caller wants scored.

use std::collections::BTreeMap;

use crate::Category;

/// Map of category to enabled flag.
///
/// Categories missing from the map are disabled.
///
/// # Examples
/// ```
/// use cityscore_core::{Category, CategorySelection};
///
/// let selection = CategorySelection::default()
///     .with(Category::Transportation)
///     .with(Category::Education);
///
/// assert!(selection.is_enabled(Category::Education));
/// assert!(!selection.is_enabled(Category::Cultural));
/// assert_eq!(selection.enabled().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategorySelection {
    flags: BTreeMap<Category, bool>,
}

impl CategorySelection {
    /// Enable every category.
    #[must_use]
    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    /// Enable `category` and return the selection.
    #[must_use]
    pub fn with(mut self, category: Category) -> Self {
        self.enable(category, true);
        self
    }

    /// Set the flag of `category`.
    pub fn enable(&mut self, category: Category, enabled: bool) {
        self.flags.insert(category, enabled);
    }

    /// Report whether `category` is enabled.
    #[must_use]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.flags.get(&category).copied().unwrap_or(false)
    }

    /// Iterate over enabled categories in presentation order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        self.flags
            .iter()
            .filter_map(|(category, enabled)| enabled.then_some(*category))
    }
}

impl FromIterator<Category> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(|category| (category, true)).collect(),
        }
    }
}
