//! Category browsing state: a cached story list, the active filters, and the
//! "show more" window over the filtered result.
//!
//! Any filter change resets the window to the first page. Replacing the
//! record list (a refetch) bumps the list version and invalidates the
//! memoized filter result but keeps the window where it is.

use std::sync::Arc;

use crate::filter::{clamp_score, matching_indices, FilterState, Selection};
use crate::pagination::Paginator;
use crate::story::{Category, RiskLevel, StoryRecord};

/// Memoized filter output, valid only for the exact key it was built from.
#[derive(Debug, Clone)]
struct FilterCache {
    filter: FilterState,
    version: u64,
    indices: Vec<usize>,
}

/// One rendered page of the browse view.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowsePage<'a> {
    pub stories: Vec<&'a StoryRecord>,
    /// Size of the full filtered result.
    pub total: usize,
    pub visible_count: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone)]
pub struct StoryBrowser {
    records: Arc<[StoryRecord]>,
    version: u64,
    filter: FilterState,
    paginator: Paginator,
    cache: Option<FilterCache>,
}

impl Default for StoryBrowser {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl StoryBrowser {
    pub fn new(records: impl Into<Arc<[StoryRecord]>>) -> Self {
        Self {
            records: records.into(),
            version: 0,
            filter: FilterState::default(),
            paginator: Paginator::new(),
            cache: None,
        }
    }

    pub fn records(&self) -> &[StoryRecord] {
        &self.records
    }

    /// Monotonic counter identifying the current record list.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_count(&self) -> usize {
        self.paginator.visible_count()
    }

    /// Swap in a freshly fetched record list.
    pub fn replace_records(&mut self, records: impl Into<Arc<[StoryRecord]>>) {
        self.records = records.into();
        self.version = self.version.wrapping_add(1);
        self.cache = None;
        tracing::debug!(
            version = self.version,
            count = self.records.len(),
            "Story list replaced"
        );
    }

    pub fn set_category(&mut self, category: Selection<Category>) {
        let next = FilterState {
            category,
            ..self.filter
        };
        self.set_filter(next);
    }

    pub fn set_risk_level(&mut self, risk_level: Selection<RiskLevel>) {
        let next = FilterState {
            risk_level,
            ..self.filter
        };
        self.set_filter(next);
    }

    pub fn set_min_risk_score(&mut self, min_risk_score: f64) {
        let next = FilterState {
            min_risk_score: clamp_score(min_risk_score),
            ..self.filter
        };
        self.set_filter(next);
    }

    /// Replace all filters at once. A change resets the window.
    pub fn set_filter(&mut self, filter: FilterState) {
        let filter = FilterState {
            min_risk_score: clamp_score(filter.min_risk_score),
            ..filter
        };
        if filter != self.filter {
            self.filter = filter;
            self.paginator.reset();
        }
    }

    pub fn show_more(&mut self) {
        self.paginator.show_more();
    }

    /// All records passing the current filters, in list order.
    pub fn filtered(&mut self) -> Vec<&StoryRecord> {
        self.refresh_cache();
        let this = &*self;
        this.cached()
    }

    /// The currently visible page.
    pub fn page(&mut self) -> BrowsePage<'_> {
        self.refresh_cache();
        let this = &*self;
        let filtered = this.cached();
        let total = filtered.len();
        BrowsePage {
            stories: this.paginator.window(&filtered).to_vec(),
            total,
            visible_count: this.paginator.visible_count(),
            has_more: this.paginator.has_more(total),
        }
    }

    fn cached(&self) -> Vec<&StoryRecord> {
        self.cache
            .as_ref()
            .map(|c| c.indices.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    fn refresh_cache(&mut self) {
        let fresh = matches!(
            &self.cache,
            Some(c) if c.version == self.version && c.filter == self.filter
        );
        if !fresh {
            self.cache = Some(FilterCache {
                filter: self.filter,
                version: self.version,
                indices: matching_indices(&self.records, &self.filter),
            });
        }
    }
}
