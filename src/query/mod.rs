//! List query engine: search, filters, sorting, pagination, selection
//!
//! Every list view in the portal (catalog, products, requests, users,
//! tickets) owns one [`ListQueryEngine`] over an immutable snapshot of its
//! collection. UI events call the mutators; rendering reads [`view()`],
//! which recomputes search → filters → sort → pagination in that fixed
//! order. The view is a pure function of (collection, query): identical
//! inputs always produce identical output, with no cached state in
//! between.
//!
//! Sort and filter keys are restricted to the closed sets the record type
//! declares ([`Record::sortable_fields`] / [`Record::filterable_fields`]),
//! so an invalid key is a typed [`QueryError`] at the call site rather
//! than a surprise during recompute.
//!
//! [`view()`]: ListQueryEngine::view

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::config::ViewConfig;
use crate::core::entity::{Entity, Record};
use crate::core::error::{PortalResult, QueryError};

/// Direction of a column sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction (clicking a sorted column header flips it)
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// One filter dimension's current choice.
///
/// `All` is the sentinel meaning "no constraint" — the first entry of
/// every filter dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterChoice {
    #[default]
    All,
    Value(String),
}

impl FilterChoice {
    pub fn value(v: impl Into<String>) -> Self {
        FilterChoice::Value(v.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterChoice::All)
    }
}

/// The current query state for one list view
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Free-text search, matched case-insensitively against the record
    /// type's searchable fields
    pub search_text: String,

    /// One choice per filterable dimension, in declaration order
    pub filters: IndexMap<&'static str, FilterChoice>,

    /// Active sort key and direction; `None` keeps source order
    pub sort: Option<(&'static str, SortDirection)>,

    /// Current page, 1-based
    pub page: usize,

    /// Records per page, always at least 1
    pub page_size: usize,

    /// Selected record ids. Keyed by id, not position, so selection
    /// survives resorting and refiltering.
    pub selection: HashSet<Uuid>,
}

/// Pagination metadata for a view result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of records per page
    pub page_size: usize,

    /// Total number of records after search and filters
    pub total_matched: usize,

    /// Total number of pages, never less than 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageInfo {
    /// Compute pagination metadata; `page` is clamped into
    /// `[1, total_pages]`.
    pub fn new(page: usize, page_size: usize, total_matched: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_matched.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            page_size,
            total_matched,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// The derived output a list view renders: matching records, the current
/// page slice, and selection state. Recomputed on every query change,
/// never stored.
#[derive(Debug, Clone)]
pub struct ViewResult<R> {
    /// All records passing search + filters, in sorted order
    pub matched: Vec<R>,

    /// The clamped page slice of `matched`
    pub page_items: Vec<R>,

    /// Pagination metadata
    pub pagination: PageInfo,

    /// How many records are currently selected (across all pages)
    pub selected_count: usize,
}

impl<R> ViewResult<R> {
    pub fn total_matched(&self) -> usize {
        self.pagination.total_matched
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Query engine for one list view.
///
/// Holds a read-only collection snapshot (supplied once, never swapped)
/// and the view's mutable [`ListQuery`]. All mutators run to completion
/// synchronously; there is no hidden state beyond the query itself.
pub struct ListQueryEngine<R: Record> {
    collection: Arc<[R]>,
    query: ListQuery,
}

impl<R: Record> ListQueryEngine<R> {
    /// Create an engine with default query state: empty search, every
    /// filter dimension on `All`, source order, page 1, empty selection.
    pub fn new(collection: Arc<[R]>, page_size: usize) -> PortalResult<Self> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize {
                requested: page_size,
            }
            .into());
        }

        let filters = R::filterable_fields()
            .iter()
            .map(|f| (*f, FilterChoice::All))
            .collect();

        debug!(
            resource = R::resource_name(),
            records = collection.len(),
            page_size,
            "list query engine created"
        );

        Ok(Self {
            collection,
            query: ListQuery {
                search_text: String::new(),
                filters,
                sort: None,
                page: 1,
                page_size,
                selection: HashSet::new(),
            },
        })
    }

    /// Create an engine from a view configuration (page size plus an
    /// optional default sort).
    pub fn with_config(collection: Arc<[R]>, config: &ViewConfig) -> PortalResult<Self> {
        let mut engine = Self::new(collection, config.page_size)?;
        if let Some(key) = &config.default_sort {
            engine.set_sort(key)?;
            if config.default_direction == SortDirection::Descending {
                engine.set_sort(key)?;
            }
        }
        Ok(engine)
    }

    /// The current query state
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The collection snapshot this engine queries
    pub fn collection(&self) -> &Arc<[R]> {
        &self.collection
    }

    // === Mutators ===

    /// Replace the search text. Resets to page 1, since changing the
    /// result set invalidates the old page position. Empty text matches
    /// everything.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.query.page = 1;
    }

    /// Set or clear (via [`FilterChoice::All`]) one filter dimension.
    /// Resets to page 1.
    pub fn set_filter(&mut self, field: &str, choice: FilterChoice) -> PortalResult<()> {
        let key = R::filterable_fields()
            .iter()
            .find(|f| **f == field)
            .copied()
            .ok_or_else(|| QueryError::UnknownField {
                resource: R::resource_name(),
                field: field.to_string(),
                allowed: R::filterable_fields(),
            })?;

        self.query.filters.insert(key, choice);
        self.query.page = 1;
        Ok(())
    }

    /// Sort by `key`: a repeated key flips the direction, a new key sorts
    /// ascending. Does not reset the page — sorting reorders the matched
    /// set without changing it, accepting that page contents may shift.
    pub fn set_sort(&mut self, key: &str) -> PortalResult<()> {
        let key = R::sortable_fields()
            .iter()
            .find(|f| **f == key)
            .copied()
            .ok_or_else(|| QueryError::UnknownField {
                resource: R::resource_name(),
                field: key.to_string(),
                allowed: R::sortable_fields(),
            })?;

        self.query.sort = match self.query.sort {
            Some((current, dir)) if current == key => Some((key, dir.flip())),
            _ => Some((key, SortDirection::Ascending)),
        };
        Ok(())
    }

    /// Move to page `n`, clamped into `[1, total_pages]`. Out-of-range
    /// requests land on the nearest bound rather than failing.
    pub fn set_page(&mut self, n: usize) {
        let total_pages = self.matched_refs().len().div_ceil(self.query.page_size).max(1);
        self.query.page = n.clamp(1, total_pages);
    }

    /// Add `id` to the selection if absent, remove it if present
    pub fn toggle_select(&mut self, id: Uuid) {
        if !self.query.selection.remove(&id) {
            self.query.selection.insert(id);
        }
    }

    /// Page-scoped bulk toggle: if every record on the current page is
    /// selected, deselect them all; otherwise select them all. Operates
    /// only on the current page, not the full matched set.
    pub fn toggle_select_all_visible(&mut self) {
        let page_ids: Vec<Uuid> = {
            let matched = self.matched_refs();
            let info = PageInfo::new(self.query.page, self.query.page_size, matched.len());
            let start = (info.page - 1) * info.page_size;
            matched
                .iter()
                .skip(start)
                .take(info.page_size)
                .map(|r| r.id())
                .collect()
        };

        if page_ids.is_empty() {
            return;
        }

        if page_ids.iter().all(|id| self.query.selection.contains(id)) {
            for id in page_ids {
                self.query.selection.remove(&id);
            }
        } else {
            for id in page_ids {
                self.query.selection.insert(id);
            }
        }
    }

    /// Empty the selection unconditionally
    pub fn clear_selection(&mut self) {
        self.query.selection.clear();
    }

    // === Recompute ===

    /// Apply search → filters → sort → pagination and return the derived
    /// view.
    pub fn view(&self) -> ViewResult<R> {
        let matched_refs = self.matched_refs();
        let pagination = PageInfo::new(self.query.page, self.query.page_size, matched_refs.len());

        let start = (pagination.page - 1) * pagination.page_size;
        let page_items: Vec<R> = matched_refs
            .iter()
            .skip(start)
            .take(pagination.page_size)
            .map(|r| (*r).clone())
            .collect();

        ViewResult {
            matched: matched_refs.into_iter().cloned().collect(),
            page_items,
            pagination,
            selected_count: self.query.selection.len(),
        }
    }

    /// Search, filter, and sort, returning references in final order
    fn matched_refs(&self) -> Vec<&R> {
        let needle = self.query.search_text.trim().to_lowercase();

        let mut matched: Vec<&R> = self
            .collection
            .iter()
            .filter(|record| self.matches_search(record, &needle))
            .filter(|record| self.matches_filters(record))
            .collect();

        if let Some((key, direction)) = self.query.sort {
            // Stable sort: ties keep their source order, so repeating a
            // sort on an already-sorted field is idempotent.
            matched.sort_by(|a, b| {
                match (a.field_value(key), b.field_value(key)) {
                    (Some(va), Some(vb)) => {
                        let ord = va.compare(&vb);
                        match direction {
                            SortDirection::Ascending => ord,
                            SortDirection::Descending => ord.reverse(),
                        }
                    }
                    // Records missing the sort field go last either way
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                }
            });
        }

        matched
    }

    fn matches_search(&self, record: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        R::searchable_fields().iter().any(|field| {
            record
                .field_value(field)
                .map(|v| v.display_text().to_lowercase().contains(needle))
                .unwrap_or(false)
        })
    }

    fn matches_filters(&self, record: &R) -> bool {
        self.query.filters.iter().all(|(field, choice)| match choice {
            FilterChoice::All => true,
            FilterChoice::Value(wanted) => record
                .field_value(field)
                .map(|v| v.display_text() == *wanted)
                .unwrap_or(false),
        })
    }
}

impl<R: Record> std::fmt::Debug for ListQueryEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListQueryEngine")
            .field("resource", &R::resource_name())
            .field("records", &self.collection.len())
            .field("query", &self.query)
            .finish()
    }
}
