//! Static reference catalogs.
//!
//! A [`Catalog`] is an ordered, non-empty table of named entries. Lookups are
//! exact string matches. The first entry is the catalog default and is what
//! [`Catalog::resolve`] falls back to when a name is missing.

use crate::error::{EstimateError, Result};

/// An entry that can live in a [`Catalog`].
pub trait CatalogEntry: 'static {
    /// Lookup key and display label.
    fn name(&self) -> &'static str;

    /// Error reported by [`Catalog::lookup`] for a missing name.
    fn unknown(name: &str) -> EstimateError;
}

/// Ordered, read-only table of named entries.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<T: CatalogEntry> {
    entries: &'static [T],
}

impl<T: CatalogEntry> Catalog<T> {
    /// Wrap a static table. Panics at compile time if `entries` is empty.
    pub const fn new(entries: &'static [T]) -> Self {
        assert!(!entries.is_empty(), "catalog must not be empty");
        Self { entries }
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &'static [T] {
        self.entries
    }

    /// Entry names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.name())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; catalogs are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fallback entry: the first one in catalog order.
    pub fn default_entry(&self) -> &'static T {
        &self.entries[0]
    }

    /// Exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&'static T> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Lenient lookup: unknown names resolve to [`Catalog::default_entry`].
    ///
    /// This is the policy the estimator uses. Callers are expected to pass
    /// names taken from [`Catalog::names`], so the fallback only guards
    /// against stale or mistyped keys.
    pub fn resolve(&self, name: &str) -> &'static T {
        self.find(name).unwrap_or_else(|| self.default_entry())
    }

    /// Strict lookup: unknown names are an error.
    pub fn lookup(&self, name: &str) -> Result<&'static T> {
        self.find(name).ok_or_else(|| T::unknown(name))
    }

    /// True if `name` is an exact key in this catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

impl<T: CatalogEntry> IntoIterator for Catalog<T> {
    type Item = &'static T;
    type IntoIter = std::slice::Iter<'static, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry(&'static str);

    impl CatalogEntry for Entry {
        fn name(&self) -> &'static str {
            self.0
        }

        fn unknown(name: &str) -> EstimateError {
            EstimateError::UnknownMaterial(name.to_string())
        }
    }

    const ENTRIES: &[Entry] = &[Entry("a"), Entry("b"), Entry("c")];
    const TABLE: Catalog<Entry> = Catalog::new(ENTRIES);

    #[test]
    fn test_find_exact() {
        assert_eq!(TABLE.find("b"), Some(&Entry("b")));
        assert_eq!(TABLE.find("B"), None);
        assert_eq!(TABLE.find(" b"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        assert_eq!(TABLE.resolve("c"), &Entry("c"));
        assert_eq!(TABLE.resolve("zzz"), &Entry("a"));
        assert_eq!(TABLE.resolve(""), &Entry("a"));
    }

    #[test]
    fn test_lookup_strict() {
        assert!(TABLE.lookup("a").is_ok());
        let err = TABLE.lookup("zzz").unwrap_err();
        assert!(matches!(err, EstimateError::UnknownMaterial(ref n) if n == "zzz"));
    }

    #[test]
    fn test_names_in_order() {
        let names: Vec<_> = TABLE.names().collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(TABLE.len(), 3);
        assert!(!TABLE.is_empty());
        assert_eq!(TABLE.into_iter().count(), 3);
    }
}
