//! Per-year cache of [`LunarYear`] tables.
//!
//! The cache is an ordinary value owned by whoever builds lunar
//! calendars; share it between calendars with an `Arc`.  Each year gets its
//! own slot mutex, so concurrent requests for the same year build it once
//! while different years build in parallel.  Failed builds are not stored.
//!
//! Tables depend on the settings they were built with, so a cache is bound
//! to one [`Settings`] value for its whole life.

use crate::lunar_year::LunarYear;
use lc_core::{Result, Settings};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

type Slot = Arc<Mutex<Option<Arc<LunarYear>>>>;

/// Compute-once store of lunar year tables keyed by Gregorian year.
#[derive(Debug, Default)]
pub struct YearCache {
    settings: Settings,
    slots: Mutex<HashMap<i32, Slot>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic inside a build leaves the slot empty, which is still valid.
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl YearCache {
    /// An empty cache for tables built with `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            slots: Mutex::default(),
        }
    }

    /// The settings every cached table was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return the table for `year`, building it with `build` on a miss.
    pub fn get_or_build<F>(&self, year: i32, build: F) -> Result<Arc<LunarYear>>
    where
        F: FnOnce() -> Result<LunarYear>,
    {
        let slot = Arc::clone(lock(&self.slots).entry(year).or_default());
        let mut entry = lock(&slot);
        if let Some(table) = entry.as_ref() {
            return Ok(Arc::clone(table));
        }
        debug!(year, "lunar year cache miss");
        let table = Arc::new(build()?);
        *entry = Some(Arc::clone(&table));
        Ok(table)
    }

    /// The cached table for `year`, without building.
    pub fn get(&self, year: i32) -> Option<Arc<LunarYear>> {
        let slot = lock(&self.slots).get(&year).cloned()?;
        let entry = lock(&slot);
        entry.clone()
    }

    /// Drop every cached table.
    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    /// Number of years currently cached.
    pub fn len(&self) -> usize {
        lock(&self.slots)
            .values()
            .filter(|slot| lock(slot).is_some())
            .count()
    }

    /// Whether no year is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_core::{Error, Settings};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builds_once_per_year() {
        let cache = YearCache::default();
        let builds = AtomicUsize::new(0);
        let build = || {
            builds.fetch_add(1, Ordering::SeqCst);
            LunarYear::build(2023, &Settings::default())
        };
        let a = cache.get_or_build(2023, build).unwrap();
        let b = cache.get_or_build(2023, build).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_requests_share_one_build() {
        let cache = YearCache::default();
        let builds = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    cache
                        .get_or_build(2020, || {
                            builds.fetch_add(1, Ordering::SeqCst);
                            LunarYear::build(2020, &Settings::default())
                        })
                        .unwrap()
                });
            }
        });
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = YearCache::default();
        let err = cache
            .get_or_build(1999, || Err(Error::Runtime("boom".into())))
            .unwrap_err();
        assert_eq!(err, Error::Runtime("boom".into()));
        assert!(cache.get(1999).is_none());
        assert!(cache.is_empty());
        assert!(cache
            .get_or_build(1999, || LunarYear::build(1999, &Settings::default()))
            .is_ok());
        assert!(cache.get(1999).is_some());
    }

    #[test]
    fn clear_empties() {
        let cache = YearCache::default();
        cache
            .get_or_build(2001, || LunarYear::build(2001, &Settings::default()))
            .unwrap();
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(2001).is_none());
    }
}
