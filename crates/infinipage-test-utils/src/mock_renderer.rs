//! Recording implementation of `CellRenderer` for testing.
//!
//! Records every cell the engine asks for without producing real content.

use std::sync::Arc;

use infinipage::{CellContext, CellRenderer, CellSlot, PageCoord, VisibilityInfo};
use infinipage_core::alloc::HashMap;
use parking_lot::Mutex;

/// Records a render call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub page: PageCoord,
    pub slot: CellSlot,
    pub current_page: PageCoord,
    pub is_dragging: bool,
    pub visibility: Option<VisibilityInfo>,
}

/// Content produced by [`MockCellRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockCell {
    pub page: PageCoord,
    pub slot: CellSlot,
}

#[derive(Debug, Default)]
struct Log {
    calls: Vec<RenderCall>,
    per_page: HashMap<PageCoord, usize>,
}

/// Mock cell renderer that records every call.
///
/// Clones share the same log.
///
/// # Example
///
/// ```rust
/// use infinipage::{CellSlot, PageCoord, PagerConfig, PagerGestureEngine};
/// use infinipage_test_utils::MockCellRenderer;
///
/// let pager = PagerGestureEngine::new(PagerConfig::default()).unwrap();
/// let mock = MockCellRenderer::new();
///
/// let cells = pager.render_cells(&mut mock.clone());
///
/// assert_eq!(mock.call_count(), 3);
/// assert!(cells.leading.is_blank());
/// assert_eq!(mock.count_for_slot(CellSlot::Bottom), 1);
/// assert_eq!(mock.count_for_page(PageCoord::new(0, 0)), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCellRenderer {
    log: Arc<Mutex<Log>>,
}

impl MockCellRenderer {
    /// Create a new mock renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RenderCall> {
        self.log.lock().calls.clone()
    }

    /// Pages requested, in call order.
    pub fn pages(&self) -> Vec<PageCoord> {
        self.log.lock().calls.iter().map(|call| call.page).collect()
    }

    /// How many times `page` has been rendered.
    pub fn count_for_page(&self, page: PageCoord) -> usize {
        self.log.lock().per_page.get(&page).copied().unwrap_or(0)
    }

    /// How many calls were made for `slot`.
    pub fn count_for_slot(&self, slot: CellSlot) -> usize {
        let log = self.log.lock();
        log.calls.iter().filter(|call| call.slot == slot).count()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        let mut log = self.log.lock();
        log.calls.clear();
        log.per_page.clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.log.lock().calls.len()
    }
}

impl CellRenderer for MockCellRenderer {
    type Content = MockCell;

    fn render_cell(&mut self, page: PageCoord, ctx: &CellContext) -> MockCell {
        let mut log = self.log.lock();
        log.calls.push(RenderCall {
            page,
            slot: ctx.slot,
            current_page: ctx.current_page,
            is_dragging: ctx.is_dragging,
            visibility: ctx.visibility,
        });
        *log.per_page.entry(page).or_insert(0) += 1;
        MockCell {
            page,
            slot: ctx.slot,
        }
    }
}
