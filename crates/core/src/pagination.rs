//! Incrementally growing "show more" window over a filtered list.

/// Number of stories visible before any "show more".
pub const INITIAL_VISIBLE: usize = 20;

/// How many more stories each "show more" reveals.
pub const PAGE_STEP: usize = 10;

/// Visible-window counter. The counter may run past the list length; the
/// rendered slice is always clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    visible_count: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            visible_count: INITIAL_VISIBLE,
        }
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit window size (at least one page).
    pub fn with_visible(visible_count: usize) -> Self {
        Self {
            visible_count: visible_count.max(INITIAL_VISIBLE),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn show_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(PAGE_STEP);
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.visible_count = INITIAL_VISIBLE;
    }

    /// The visible prefix of `items`.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count.min(items.len())]
    }

    /// Whether items beyond the window exist.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }
}
