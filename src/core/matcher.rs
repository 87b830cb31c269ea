//! Catalog matching against a snapshot captured once per run. Matching is
//! canonical-key equality only; an unmatched name is reported, never
//! guessed.

use std::collections::HashMap;

use crate::core::normalize::normalize_key;

/// Read-only mapping of canonical name key to identifier, built once from a
/// catalog listing.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_key: HashMap<String, i64>,
}

impl CatalogIndex {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let by_key = entries
            .into_iter()
            .map(|(name, id)| (normalize_key(name.as_ref()), id))
            .collect();
        Self { by_key }
    }

    pub fn resolve(&self, raw_name: &str) -> Option<i64> {
        self.by_key.get(&normalize_key(raw_name)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// A snapshot plus a local overlay of records created during the current
/// run. Reads consult the overlay first, then the snapshot; writes only
/// ever touch the overlay, so the snapshot stays auditable.
#[derive(Debug, Clone, Default)]
pub struct CatalogOverlay {
    snapshot: CatalogIndex,
    overlay: HashMap<String, i64>,
}

impl CatalogOverlay {
    pub fn new(snapshot: CatalogIndex) -> Self {
        Self {
            snapshot,
            overlay: HashMap::new(),
        }
    }

    /// Overlay over an empty snapshot; used for menus, whose names are only
    /// unique within one import batch.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn resolve(&self, raw_name: &str) -> Option<i64> {
        let key = normalize_key(raw_name);
        self.overlay
            .get(&key)
            .copied()
            .or_else(|| self.snapshot.by_key.get(&key).copied())
    }

    pub fn insert(&mut self, raw_name: &str, id: i64) {
        self.overlay.insert(normalize_key(raw_name), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_accent_and_whitespace_insensitive() {
        let index = CatalogIndex::from_entries([("Pimentón", 1), ("Pasta spaguetti", 2)]);
        assert_eq!(index.resolve("pimenton"), Some(1));
        assert_eq!(index.resolve("  PIMENTÓN "), Some(1));
        assert_eq!(index.resolve("Pasta  spaguetti"), Some(2));
        assert_eq!(index.resolve("Pasta"), None);
    }

    #[test]
    fn test_resolve_is_never_fuzzy() {
        let index = CatalogIndex::from_entries([("Arroz", 1)]);
        assert_eq!(index.resolve("Aroz"), None);
        assert_eq!(index.resolve("Arroz cocido"), None);
    }

    #[test]
    fn test_overlay_shadows_and_extends_snapshot() {
        let snapshot = CatalogIndex::from_entries([("Minuta base", 1)]);
        let mut overlay = CatalogOverlay::new(snapshot);

        assert_eq!(overlay.resolve("minuta base"), Some(1));
        assert_eq!(overlay.resolve("Minuta nueva"), None);

        overlay.insert("Minuta nueva", 7);
        assert_eq!(overlay.resolve("MINUTA  NUEVA"), Some(7));
        // Snapshot entries stay visible.
        assert_eq!(overlay.resolve("Minuta base"), Some(1));
    }
}
