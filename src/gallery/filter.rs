// SPDX-License-Identifier: MPL-2.0
//! Category filter for the gallery grid.

use super::catalog::{ImageRecord, ALL_KEY};

/// Which records the grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every record.
    #[default]
    All,
    /// Show only records whose category key equals this one.
    Category(String),
}

impl CategoryFilter {
    /// Builds a filter from a filter-control key; `"all"` selects everything.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == ALL_KEY {
            Self::All
        } else {
            Self::Category(key.to_string())
        }
    }

    /// The key this filter was built from.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_KEY,
            Self::Category(key) => key,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &ImageRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => record.category_key == *key,
        }
    }

    /// Returns `true` if this filter hides anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::ImageId;

    fn record(key: &str) -> ImageRecord {
        ImageRecord {
            id: ImageId(1),
            src: String::new(),
            title: String::new(),
            category: String::new(),
            category_key: key.to_string(),
        }
    }

    #[test]
    fn all_matches_everything() {
        let filter = CategoryFilter::from_key("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches(&record("nature")));
        assert!(filter.matches(&record("city")));
        assert!(!filter.is_active());
    }

    #[test]
    fn category_matches_exact_key_only() {
        let filter = CategoryFilter::from_key("nature");
        assert!(filter.matches(&record("nature")));
        assert!(!filter.matches(&record("Nature")));
        assert!(!filter.matches(&record("city")));
        assert!(filter.is_active());
        assert_eq!(filter.key(), "nature");
    }
}
