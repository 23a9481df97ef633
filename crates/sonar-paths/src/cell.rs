//! [`Cell`]: one sea or island square plus its search state.

use std::cmp::Ordering;
use std::fmt;

use sonar_core::Point;

use crate::distance::octile;

/// Handle to a [`Cell`] inside the [`Grid`](crate::Grid) that issued it.
///
/// Parent links between cells are stored as handles rather than
/// references, so a search can rewrite them freely while the grid owns
/// every cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Position of the cell in its grid's row-major storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A grid position with navigability and search costs.
///
/// Equality compares coordinates only. Cost ordering is available through
/// [`cmp_cost`](Self::cmp_cost) and [`has_priority_over`](Self::has_priority_over)
/// rather than `PartialOrd`, so that two cells can be unequal yet tie on cost.
#[derive(Clone, Debug)]
pub struct Cell {
    navigable: bool,
    pos: Point,
    parent: Option<CellId>,
    in_path: bool,
    g_cost: f64,
    h_cost: f64,
}

impl Cell {
    /// Create an unvisited cell.
    pub fn new(navigable: bool, pos: Point) -> Self {
        Self {
            navigable,
            pos,
            parent: None,
            in_path: false,
            g_cost: f64::MAX,
            h_cost: f64::MAX,
        }
    }

    #[inline]
    pub fn is_navigable(&self) -> bool {
        self.navigable
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// The cell this one was reached from during the last search.
    #[inline]
    pub fn parent(&self) -> Option<CellId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<CellId>) {
        self.parent = parent;
    }

    /// Whether the last retraced path runs through this cell.
    #[inline]
    pub fn in_path(&self) -> bool {
        self.in_path
    }

    pub(crate) fn set_in_path(&mut self, in_path: bool) {
        self.in_path = in_path;
    }

    /// Accumulated cost from the search start; `f64::MAX` when unreached.
    #[inline]
    pub fn g_cost(&self) -> f64 {
        self.g_cost
    }

    pub fn set_g_cost(&mut self, g_cost: f64) {
        self.g_cost = g_cost;
    }

    /// Estimated remaining cost to the search target; `f64::MAX` when unset.
    #[inline]
    pub fn h_cost(&self) -> f64 {
        self.h_cost
    }

    pub fn set_h_cost(&mut self, h_cost: f64) {
        self.h_cost = h_cost;
    }

    /// Total cost `g + h`.
    #[inline]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }

    /// Step distance to `other` (see [`octile`]).
    #[inline]
    pub fn distance(&self, other: &Cell) -> u32 {
        octile(self.pos, other.pos)
    }

    /// Compare by total cost.
    pub fn cmp_cost(&self, other: &Cell) -> Ordering {
        self.f_cost().total_cmp(&other.f_cost())
    }

    /// Whether this cell's total cost is strictly lower than `other`'s.
    pub fn has_priority_over(&self, other: &Cell) -> bool {
        self.cmp_cost(other) == Ordering::Less
    }

    /// Forget all search state.
    pub fn reset(&mut self) {
        self.parent = None;
        self.in_path = false;
        self.g_cost = f64::MAX;
        self.h_cost = f64::MAX;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = if self.navigable { '.' } else { '+' };
        write!(f, "{ch}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sea(x: i32, y: i32) -> Cell {
        Cell::new(true, Point::new(x, y))
    }

    #[test]
    fn new_cell_is_unvisited() {
        let c = Cell::new(true, Point::new(2, 3));
        assert_eq!((c.x(), c.y()), (2, 3));
        assert!(c.is_navigable());
        assert!(!c.in_path());
        assert_eq!(c.parent(), None);
        assert_eq!(c.g_cost(), f64::MAX);
        assert_eq!(c.h_cost(), f64::MAX);
    }

    #[test]
    fn f_cost_sums_g_and_h() {
        let mut c = sea(1, 2);
        c.set_h_cost(12.5);
        c.set_g_cost(21.5);
        assert_eq!(c.f_cost(), 34.0);
    }

    #[test]
    fn parent_handle() {
        let mut c = sea(1, 2);
        c.set_parent(Some(CellId(7)));
        assert_eq!(c.parent().map(CellId::index), Some(7));
        c.set_parent(None);
        assert_eq!(c.parent(), None);
    }

    #[test]
    fn distance_examples() {
        let a = sea(1, 2);
        assert_eq!(a.distance(&sea(4, 3)), 34);
        assert_eq!(a.distance(&sea(1, 2)), 0);
        assert_eq!(a.distance(&sea(1, 10)), 80);
        assert_eq!(a.distance(&sea(9, 2)), 80);
        assert_eq!(sea(9, 2).distance(&a), 80);
    }

    #[test]
    fn equality_ignores_navigability_and_costs() {
        let mut a = sea(1, 2);
        let b = Cell::new(false, Point::new(1, 2));
        a.set_g_cost(3.0);
        assert_eq!(a, b);
        assert_ne!(a, sea(2, 1));
    }

    #[test]
    fn ordering_uses_total_cost() {
        let mut a = sea(1, 2);
        a.set_h_cost(12.5);
        a.set_g_cost(21.5);
        let mut b = sea(4, 1);
        b.set_h_cost(11.5);
        b.set_g_cost(22.5);
        assert!(!a.has_priority_over(&b));
        assert_eq!(a.cmp_cost(&b), Ordering::Equal);
        b.set_h_cost(12.0);
        assert!(a.has_priority_over(&b));
        assert_eq!(b.cmp_cost(&a), Ordering::Greater);
    }

    #[test]
    fn display_symbols() {
        assert_eq!(sea(0, 0).to_string(), ".");
        assert_eq!(Cell::new(false, Point::new(1, 2)).to_string(), "+");
    }

    #[test]
    fn reset_clears_search_state() {
        let mut c = sea(0, 0);
        c.set_g_cost(10.0);
        c.set_h_cost(4.0);
        c.set_parent(Some(CellId(1)));
        c.set_in_path(true);
        c.reset();
        assert_eq!(c.g_cost(), f64::MAX);
        assert_eq!(c.parent(), None);
        assert!(!c.in_path());
    }
}
