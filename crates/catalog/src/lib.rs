pub mod browse;
pub mod categories;
pub mod clock;
pub mod episodes;
pub mod movies;
pub mod series;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::categories::Category;
use crate::clock::{Clock, SystemClock};
use crate::episodes::Episode;
use crate::movies::Movie;
use crate::series::Series;

/// One entity collection: rows in insertion order plus the identity counter.
/// Identity starts at 1 and is never reused, even after deletion.
pub(crate) struct Table<T> {
    pub(crate) rows: Vec<T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Sole owner of all catalog records. One lock per kind; no operation spans
/// kinds. Every returned record is an owned clone, so callers never observe
/// or cause mutation outside the update path.
pub struct CatalogStore {
    pub(crate) movies: RwLock<Table<Movie>>,
    pub(crate) series: RwLock<Table<Series>>,
    pub(crate) episodes: RwLock<Table<Episode>>,
    pub(crate) categories: RwLock<Table<Category>>,
    clock: Arc<dyn Clock>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Build a store with an explicit clock for record timestamps.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            movies: RwLock::new(Table::new()),
            series: RwLock::new(Table::new()),
            episodes: RwLock::new(Table::new()),
            categories: RwLock::new(Table::new()),
            clock,
        }
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

// Every store operation is a single-step transition, so a guard recovered
// from a poisoned lock still sees consistent rows.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

pub(crate) fn default_quality() -> String {
    "HD".to_string()
}

pub(crate) fn default_language() -> String {
    "Arabic".to_string()
}

/// Case-normalized containment for source-language fields. The needle must
/// already be lowercased by the caller.
pub(crate) fn latin_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle))
}

/// Raw containment for Arabic fields, which have no case distinction.
pub(crate) fn arabic_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.contains(needle))
}

/// Deserialize a present field into `Some(inner)` so patch payloads keep
/// "absent" (outer `None`) distinct from "explicit null" (`Some(None)`).
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}
