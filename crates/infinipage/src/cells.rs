//! Which cells the host renders, and the context each one receives.
//!
//! The pager shows the current cell plus up to four neighbors on a 3x3 grid
//! whose corners are always blank. A neighbor on a bounded axis exists only
//! while it is inside `[0, total - 1]`; missing neighbors become
//! [`Cell::Blank`] and the renderer is never asked for them.

use std::fmt;

use bitflags::bitflags;

use crate::axis::Axis;
use crate::config::PagerConfig;
use crate::page_index::{self, PageDirection};
use crate::visibility::VisibilityInfo;

/// A cell address on the virtual grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PageCoord {
    pub horizontal: i64,
    pub vertical: i64,
}

impl PageCoord {
    pub const fn new(horizontal: i64, vertical: i64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The index on `axis`.
    pub fn on(self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// A copy with the index on `axis` replaced.
    pub fn with(self, axis: Axis, page: i64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                horizontal: page,
                ..self
            },
            Axis::Vertical => Self {
                vertical: page,
                ..self
            },
        }
    }
}

/// Formats as `"h,v"`, suitable as a key for the rendered cell stack.
impl fmt::Display for PageCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.horizontal, self.vertical)
    }
}

/// The five rendered positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSlot {
    Current,
    /// Left of current (previous horizontal page).
    Leading,
    /// Right of current (next horizontal page).
    Trailing,
    /// Above current (previous vertical page).
    Top,
    /// Below current (next vertical page).
    Bottom,
}

impl CellSlot {
    pub const ALL: [CellSlot; 5] = [
        CellSlot::Current,
        CellSlot::Leading,
        CellSlot::Trailing,
        CellSlot::Top,
        CellSlot::Bottom,
    ];

    /// Axis and direction of a neighbor slot relative to current.
    pub fn offset(self) -> Option<(Axis, PageDirection)> {
        match self {
            CellSlot::Current => None,
            CellSlot::Leading => Some((Axis::Horizontal, PageDirection::Backward)),
            CellSlot::Trailing => Some((Axis::Horizontal, PageDirection::Forward)),
            CellSlot::Top => Some((Axis::Vertical, PageDirection::Backward)),
            CellSlot::Bottom => Some((Axis::Vertical, PageDirection::Forward)),
        }
    }

    fn mask(self) -> NeighborMask {
        match self {
            CellSlot::Current => NeighborMask::empty(),
            CellSlot::Leading => NeighborMask::LEADING,
            CellSlot::Trailing => NeighborMask::TRAILING,
            CellSlot::Top => NeighborMask::TOP,
            CellSlot::Bottom => NeighborMask::BOTTOM,
        }
    }
}

/// Grid placement of the slots, row-major; corners are `None`.
pub const GRID: [[Option<CellSlot>; 3]; 3] = [
    [None, Some(CellSlot::Top), None],
    [
        Some(CellSlot::Leading),
        Some(CellSlot::Current),
        Some(CellSlot::Trailing),
    ],
    [None, Some(CellSlot::Bottom), None],
];

bitflags! {
    /// Neighbor slots that hold an addressable page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NeighborMask: u8 {
        const LEADING = 1 << 0;
        const TRAILING = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl NeighborMask {
    pub fn has(self, slot: CellSlot) -> bool {
        slot == CellSlot::Current || self.contains(slot.mask())
    }
}

/// The page shown in `slot`, if it exists.
pub fn page_for_slot(
    current: PageCoord,
    slot: CellSlot,
    config: &PagerConfig,
) -> Option<PageCoord> {
    let Some((axis, direction)) = slot.offset() else {
        return Some(current);
    };
    page_index::neighbor(current.on(axis), config.total_pages(axis), direction)
        .map(|page| current.with(axis, page))
}

/// Which neighbor slots of `current` are addressable.
pub fn neighbor_mask(current: PageCoord, config: &PagerConfig) -> NeighborMask {
    CellSlot::ALL
        .into_iter()
        .filter(|slot| page_for_slot(current, *slot, config).is_some())
        .fold(NeighborMask::empty(), |mask, slot| mask | slot.mask())
}

/// Pager state handed to every rendered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellContext {
    pub slot: CellSlot,
    /// The page this cell shows.
    pub page: PageCoord,
    /// The pager's current page.
    pub current_page: PageCoord,
    /// Whether a gesture is in progress; cells should ignore input while set.
    pub is_dragging: bool,
    /// Present only when visibility reporting is enabled.
    pub visibility: Option<VisibilityInfo>,
}

/// Produces cell content for a page.
///
/// Implemented for any `FnMut(PageCoord, &CellContext) -> C`.
pub trait CellRenderer {
    type Content;

    fn render_cell(&mut self, page: PageCoord, ctx: &CellContext) -> Self::Content;
}

impl<C, F> CellRenderer for F
where
    F: FnMut(PageCoord, &CellContext) -> C,
{
    type Content = C;

    fn render_cell(&mut self, page: PageCoord, ctx: &CellContext) -> C {
        self(page, ctx)
    }
}

/// One rendered slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<C> {
    Page { page: PageCoord, content: C },
    /// Placeholder for a neighbor that does not exist.
    Blank,
}

impl<C> Cell<C> {
    pub fn page(&self) -> Option<PageCoord> {
        match self {
            Cell::Page { page, .. } => Some(*page),
            Cell::Blank => None,
        }
    }

    pub fn content(&self) -> Option<&C> {
        match self {
            Cell::Page { content, .. } => Some(content),
            Cell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// The current cell and its four neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSet<C> {
    pub current: Cell<C>,
    pub leading: Cell<C>,
    pub trailing: Cell<C>,
    pub top: Cell<C>,
    pub bottom: Cell<C>,
}

impl<C> CellSet<C> {
    pub fn get(&self, slot: CellSlot) -> &Cell<C> {
        match slot {
            CellSlot::Current => &self.current,
            CellSlot::Leading => &self.leading,
            CellSlot::Trailing => &self.trailing,
            CellSlot::Top => &self.top,
            CellSlot::Bottom => &self.bottom,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellSlot, &Cell<C>)> {
        CellSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    /// The cells laid out on the 3x3 grid; `None` marks a blank corner.
    pub fn grid(&self) -> [[Option<&Cell<C>>; 3]; 3] {
        GRID.map(|row| row.map(|slot| slot.map(|slot| self.get(slot))))
    }
}

/// Render every slot around `current`, asking `renderer` only for pages
/// that exist.
pub fn render_cells<R: CellRenderer>(
    renderer: &mut R,
    config: &PagerConfig,
    current: PageCoord,
    is_dragging: bool,
    visibility: Option<VisibilityInfo>,
) -> CellSet<R::Content> {
    let mut render = |slot: CellSlot| match page_for_slot(current, slot, config) {
        Some(page) => {
            let ctx = CellContext {
                slot,
                page,
                current_page: current,
                is_dragging,
                visibility,
            };
            Cell::Page {
                page,
                content: renderer.render_cell(page, &ctx),
            }
        }
        None => Cell::Blank,
    };

    CellSet {
        current: render(CellSlot::Current),
        leading: render(CellSlot::Leading),
        trailing: render(CellSlot::Trailing),
        top: render(CellSlot::Top),
        bottom: render(CellSlot::Bottom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_coord_key() {
        assert_eq!(PageCoord::new(-2, 7).to_string(), "-2,7");
        assert_eq!(
            PageCoord::new(1, 1).with(Axis::Vertical, 4),
            PageCoord::new(1, 4)
        );
        assert_eq!(PageCoord::new(3, 9).on(Axis::Horizontal), 3);
    }

    #[test]
    fn test_corner_page_has_two_neighbors() {
        let config = PagerConfig::default();
        let mask = neighbor_mask(PageCoord::new(0, 0), &config);
        assert_eq!(mask, NeighborMask::TRAILING | NeighborMask::BOTTOM);
        assert!(mask.has(CellSlot::Current));
        assert!(!mask.has(CellSlot::Leading));
    }

    #[test]
    fn test_unbounded_always_has_neighbors() {
        let config = PagerConfig::default()
            .unbounded_horizontal()
            .unbounded_vertical();
        assert_eq!(
            neighbor_mask(PageCoord::new(0, 0), &config),
            NeighborMask::all()
        );
        assert_eq!(
            page_for_slot(PageCoord::new(0, 0), CellSlot::Leading, &config),
            Some(PageCoord::new(-1, 0))
        );
    }

    #[test]
    fn test_disabled_axis_has_no_neighbors() {
        let config = PagerConfig::default().total_horizontal_pages(Some(0));
        let mask = neighbor_mask(PageCoord::new(0, 1), &config);
        assert_eq!(mask, NeighborMask::TOP | NeighborMask::BOTTOM);
    }

    #[test]
    fn test_render_skips_missing_neighbors() {
        let config = PagerConfig::default();
        let mut asked = Vec::new();
        let cells = render_cells(
            &mut |page: PageCoord, ctx: &CellContext| {
                asked.push((ctx.slot, page));
                page.to_string()
            },
            &config,
            PageCoord::new(2, 1),
            false,
            None,
        );

        assert_eq!(asked.len(), 4);
        assert!(cells.trailing.is_blank());
        assert_eq!(cells.leading.content().map(String::as_str), Some("1,1"));
        assert_eq!(cells.top.page(), Some(PageCoord::new(2, 0)));
        assert_eq!(cells.bottom.page(), Some(PageCoord::new(2, 2)));

        let grid = cells.grid();
        assert!(grid[0][0].is_none());
        assert_eq!(grid[1][1].and_then(Cell::page), Some(PageCoord::new(2, 1)));
        assert_eq!(cells.iter().filter(|(_, cell)| cell.is_blank()).count(), 1);
    }
}
