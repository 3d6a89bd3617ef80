use std::sync::{Arc, PoisonError, RwLock};

use log::info;

use robur_domain::{Catalog, Exercise, ExerciseRepository, ReadError};

/// Shared, atomically swappable catalog snapshot. Readers always observe one
/// consistent catalog version: a refresh replaces the inner `Arc` while
/// in-flight requests keep the version they already obtained.
#[derive(Clone)]
pub struct CatalogStore {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    #[must_use]
    pub fn get(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, catalog: Catalog) {
        let catalog = Arc::new(catalog);
        info!("swapping in catalog snapshot with {} exercises", catalog.len());
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = catalog;
    }
}

impl ExerciseRepository for CatalogStore {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(self.get().iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use robur_domain::catalog;

    use super::*;

    #[test]
    fn test_get_returns_current_snapshot() {
        let store = CatalogStore::new(Catalog::new(catalog::exercises()));
        assert_eq!(store.get().len(), catalog::exercises().len());
    }

    #[test]
    fn test_replace_leaves_held_snapshots_untouched() {
        let store = CatalogStore::new(Catalog::new(catalog::exercises()));
        let before = store.get();

        store.replace(Catalog::new(vec![]));

        assert_eq!(before.len(), catalog::exercises().len());
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store = CatalogStore::new(Catalog::new(vec![]));
        let clone = store.clone();

        store.replace(Catalog::new(catalog::exercises()));

        assert_eq!(clone.get().len(), catalog::exercises().len());
    }

    #[tokio::test]
    async fn test_read_exercises() {
        let store = CatalogStore::new(Catalog::new(catalog::exercises()));
        let exercises = store.read_exercises().await.unwrap();
        assert_eq!(exercises, catalog::exercises());
    }
}
