//! The catalog store: the ordered set of movie records plus view filters.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::title::{normalize_title, parse_year};
use crate::types::{MovieId, MovieRecord, Stats, StatusFilter, ViewState};

/// Owns every movie record of a session and the active view filters.
///
/// Records live in a map keyed by [`MovieId`]. Ids are allocated from a
/// counter that only moves forward, so iterating the map yields insertion
/// order and a removed id never matches again.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: BTreeMap<MovieId, MovieRecord>,
    next_id: u64,
    view: ViewState,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
            view: ViewState::default(),
        }
    }

    /// Validate and append a new record.
    ///
    /// The title is normalized first; the year may be absent or blank. On
    /// any [`ValidationError`] the catalog is left exactly as it was.
    pub fn add(
        &mut self,
        raw_title: &str,
        raw_year: Option<&str>,
    ) -> Result<&MovieRecord, ValidationError> {
        let title = normalize_title(raw_title);
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let year = parse_year(raw_year)?;
        if self.records.values().any(|r| r.same_movie(&title, year)) {
            return Err(ValidationError::duplicate(title));
        }

        let id = MovieId::new(self.next_id);
        self.next_id += 1;
        log::debug!("Adding {} {:?} ({:?})", id, title, year);

        let record = MovieRecord {
            id,
            title,
            year,
            watched: false,
        };
        Ok(self.records.entry(id).or_insert(record))
    }

    /// Flip the watched flag of a record.
    ///
    /// Returns the new flag, or `None` if no record has this id.
    pub fn toggle(&mut self, id: MovieId) -> Option<bool> {
        let Some(record) = self.records.get_mut(&id) else {
            log::debug!("Toggle ignored: no record {}", id);
            return None;
        };
        record.watched = !record.watched;
        log::debug!("Toggled {} watched={}", id, record.watched);
        Some(record.watched)
    }

    /// Remove a record, returning it if it existed.
    pub fn remove(&mut self, id: MovieId) -> Option<MovieRecord> {
        let removed = self.records.remove(&id);
        match &removed {
            Some(record) => log::debug!("Removed {} {:?}", id, record.title),
            None => log::debug!("Remove ignored: no record {}", id),
        }
        removed
    }

    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        self.records.get(&id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.view.status = status;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
    }

    /// Records passing the current view filters, in catalog order.
    pub fn visible(&self) -> Vec<&MovieRecord> {
        project(self.records(), &self.view)
    }

    /// Counts over the whole catalog, ignoring the view filters.
    pub fn stats(&self) -> Stats {
        let total = self.records.len();
        let watched = self.records.values().filter(|r| r.watched).count();
        Stats {
            total,
            watched,
            remaining: total - watched,
        }
    }
}

/// Filter records by a view state, keeping their relative order.
pub fn project<'a, I>(records: I, view: &ViewState) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records.into_iter().filter(|r| view.admits(r)).collect()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
