//! [`Grid`]: a rectangular sea map owning all of its [`Cell`]s.
//!
//! Maps are read from text, one row per line:
//!
//! ```text
//! ..+..++
//! ++.B..+
//! .....++
//! ++.....
//! .T....+
//! ```
//!
//! `.` is open sea, `+` an island, `B` the boat and `T` the treasure (both
//! on open sea). Rendering a grid with `Display` gives the same text back.

use std::fmt;
use std::str::FromStr;

use sonar_core::{Direction, Point, Range};

use crate::cell::{Cell, CellId};

pub const SEA: char = '.';
pub const ISLAND: char = '+';
pub const BOAT: char = 'B';
pub const TREASURE: char = 'T';
pub const PATH: char = '*';

/// A rectangular sea map with a boat and a treasure.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: Vec<Cell>,
    width: usize,
    height: usize,
    boat: CellId,
    treasure: CellId,
}

impl Grid {
    /// Build a grid from text rows, validating the layout.
    ///
    /// Every row must have the same width, contain only `.`, `+`, `B` and
    /// `T`, and the map must hold exactly one boat and one treasure. A
    /// trailing `'\r'` on a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let width = rows
            .first()
            .map(|r| r.as_ref().trim_end_matches('\r').chars().count())
            .unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut boat: Option<Point> = None;
        let mut treasure: Option<Point> = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim_end_matches('\r');
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let navigable = match ch {
                    SEA => true,
                    ISLAND => false,
                    BOAT => {
                        if let Some(first) = boat {
                            return Err(MapError::DuplicateBoat { first, second: pos });
                        }
                        boat = Some(pos);
                        true
                    }
                    TREASURE => {
                        if let Some(first) = treasure {
                            return Err(MapError::DuplicateTreasure { first, second: pos });
                        }
                        treasure = Some(pos);
                        true
                    }
                    _ => return Err(MapError::InvalidSymbol { ch, pos }),
                };
                cells.push(Cell::new(navigable, pos));
            }
        }

        let boat = boat.ok_or(MapError::MissingBoat)?;
        let treasure = treasure.ok_or(MapError::MissingTreasure)?;
        let index = |p: Point| CellId(p.y as usize * width + p.x as usize);
        Ok(Self {
            cells,
            width,
            height: rows.len(),
            boat: index(boat),
            treasure: index(treasure),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The map rectangle, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// The cell currently holding the boat.
    #[inline]
    pub fn boat(&self) -> CellId {
        self.boat
    }

    /// The cell holding the treasure.
    #[inline]
    pub fn treasure(&self) -> CellId {
        self.treasure
    }

    /// Handle of the cell at `p`, or `None` when `p` is off the map.
    #[inline]
    pub fn id(&self, p: Point) -> Option<CellId> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(CellId(p.y as usize * self.width + p.x as usize))
    }

    /// The cell behind a handle issued by this grid.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a larger grid.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// The cell at `p`, or `None` when `p` is off the map.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.id(p).map(|id| self.cell(id))
    }

    /// Row-major iterator over `(CellId, &Cell)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    /// Step distance between two cells.
    #[inline]
    pub fn distance(&self, a: CellId, b: CellId) -> u32 {
        self.cell(a).distance(self.cell(b))
    }

    /// Navigable 8-way neighbors of `id`, in the fixed order
    /// S, N, E, W, SE, SW, NE, NW.
    pub fn neighbors(&self, id: CellId) -> Vec<CellId> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(id, &mut buf);
        buf
    }

    /// Like [`neighbors`](Self::neighbors) but reuses `buf`, which is
    /// cleared first.
    pub fn neighbors_into(&self, id: CellId, buf: &mut Vec<CellId>) {
        buf.clear();
        let p = self.cell(id).pos();
        for d in Direction::NEIGHBOR_ORDER {
            if let Some(n) = self.id(p + d.offset()) {
                if self.cells[n.0].is_navigable() {
                    buf.push(n);
                }
            }
        }
    }

    /// Sail the boat one step in `dir`.
    ///
    /// Returns `false`, leaving the boat where it is, when the destination
    /// is off the map or an island.
    pub fn move_boat(&mut self, dir: Direction) -> bool {
        let from = self.cell(self.boat).pos();
        let dest = self
            .id(from + dir.offset())
            .filter(|&id| self.cell(id).is_navigable());
        match dest {
            Some(id) => {
                self.boat = id;
                log::trace!("boat {from} -> {} ({dir})", self.cell(id).pos());
                true
            }
            None => {
                log::trace!("boat blocked at {from} heading {dir}");
                false
            }
        }
    }

    /// The treasure, if it lies within `range` step distance of the boat.
    pub fn treasure_within(&self, range: u32) -> Option<CellId> {
        (self.distance(self.boat, self.treasure) <= range).then_some(self.treasure)
    }

    /// Write the map, marking cells for which `on_path` holds with `*`.
    pub(crate) fn render(
        &self,
        f: &mut impl fmt::Write,
        on_path: impl Fn(CellId) -> bool,
    ) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % self.width == 0 {
                f.write_char('\n')?;
            }
            let id = CellId(i);
            let ch = if !cell.is_navigable() {
                ISLAND
            } else if id == self.boat {
                BOAT
            } else if id == self.treasure {
                TREASURE
            } else if on_path(id) {
                PATH
            } else {
                SEA
            };
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |_| false)
    }
}

impl FromStr for Grid {
    type Err = MapError;

    /// Parse a whole map, one row per line. Surrounding whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().lines().collect();
        Self::from_rows(&rows)
    }
}

/// Errors found while reading a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No rows, or an empty first row.
    Empty,
    /// A row whose width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.`, `+`, `B` or `T`.
    InvalidSymbol { ch: char, pos: Point },
    MissingBoat,
    MissingTreasure,
    DuplicateBoat { first: Point, second: Point },
    DuplicateTreasure { first: Point, second: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("map is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "map row {row} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "map contains invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingBoat => f.write_str("map has no boat (B)"),
            Self::MissingTreasure => f.write_str("map has no treasure (T)"),
            Self::DuplicateBoat { first, second } => {
                write!(f, "map has a second boat at {second}, first at {first}")
            }
            Self::DuplicateTreasure { first, second } => {
                write!(f, "map has a second treasure at {second}, first at {first}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [&str; 3] = ["B.++", ".+..", "...T"];

    const HARBOUR: &str = "\
..+..++
++.B..+
.....++
++.....
.T....+";

    fn small() -> Grid {
        Grid::from_rows(&SMALL).unwrap()
    }

    fn points(g: &Grid, ids: &[CellId]) -> Vec<Point> {
        ids.iter().map(|&id| g.cell(id).pos()).collect()
    }

    #[test]
    fn parse_dimensions_and_markers() {
        let g = small();
        assert_eq!((g.width(), g.height()), (4, 3));
        assert_eq!(g.cell(g.boat()).pos(), Point::new(0, 0));
        assert_eq!(g.cell(g.treasure()).pos(), Point::new(3, 2));
        assert!(!g.at(Point::new(2, 0)).unwrap().is_navigable());
        assert!(g.at(Point::new(4, 0)).is_none());
    }

    #[test]
    fn cells_match_their_positions() {
        let g: Grid = HARBOUR.parse().unwrap();
        for (id, cell) in g.cells() {
            assert_eq!(g.id(cell.pos()), Some(id));
        }
        assert_eq!(g.cells().count(), g.bounds().len());
    }

    #[test]
    fn display_round_trip() {
        let g: Grid = HARBOUR.parse().unwrap();
        assert_eq!(g.to_string(), HARBOUR);
        let again: Grid = g.to_string().parse().unwrap();
        for ((_, a), (_, b)) in g.cells().zip(again.cells()) {
            assert_eq!(a.is_navigable(), b.is_navigable());
        }
        assert_eq!(small().to_string(), SMALL.join("\n"));
    }

    #[test]
    fn crlf_rows_are_accepted() {
        let g: Grid = "B.\r\n.T\r\n".parse().unwrap();
        assert_eq!(g.to_string(), "B.\n.T");
    }

    #[test]
    fn rejects_malformed_maps() {
        let empty: [&str; 0] = [];
        assert_eq!(Grid::from_rows(&empty).unwrap_err(), MapError::Empty);
        assert_eq!(Grid::from_rows(&[""]).unwrap_err(), MapError::Empty);
        assert_eq!(
            Grid::from_rows(&["B.", "..T"]).unwrap_err(),
            MapError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Grid::from_rows(&["B.", ".#"]).unwrap_err(),
            MapError::InvalidSymbol {
                ch: '#',
                pos: Point::new(1, 1)
            }
        );
        assert_eq!(
            Grid::from_rows(&["..", ".T"]).unwrap_err(),
            MapError::MissingBoat
        );
        assert_eq!(
            Grid::from_rows(&["B.", ".."]).unwrap_err(),
            MapError::MissingTreasure
        );
        assert_eq!(
            Grid::from_rows(&["BT", "B."]).unwrap_err(),
            MapError::DuplicateBoat {
                first: Point::new(0, 0),
                second: Point::new(0, 1)
            }
        );
        assert_eq!(
            Grid::from_rows(&["BT", ".T"]).unwrap_err(),
            MapError::DuplicateTreasure {
                first: Point::new(1, 0),
                second: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn error_messages() {
        let err = Grid::from_rows(&["B.", ".x"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "map contains invalid symbol \u{201c}x\u{201d} at (1, 1)"
        );
        assert_eq!(MapError::MissingBoat.to_string(), "map has no boat (B)");
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let g = small();
        let top = g.id(Point::new(1, 0)).unwrap();
        assert_eq!(
            points(&g, &g.neighbors(top)),
            [Point::new(0, 0), Point::new(2, 1), Point::new(0, 1)]
        );

        let corner = g.id(Point::new(3, 2)).unwrap();
        assert_eq!(
            points(&g, &g.neighbors(corner)),
            [Point::new(3, 1), Point::new(2, 2), Point::new(2, 1)]
        );

        let island = g.id(Point::new(1, 1)).unwrap();
        assert_eq!(
            points(&g, &g.neighbors(island)),
            [
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(2, 2),
                Point::new(0, 2),
                Point::new(0, 0),
            ]
        );
    }

    #[test]
    fn neighbors_into_clears_buffer() {
        let g = small();
        let mut buf = vec![g.treasure(); 5];
        g.neighbors_into(g.boat(), &mut buf);
        assert_eq!(points(&g, &buf), [Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn move_boat_south() {
        let mut g = small();
        assert!(g.move_boat(Direction::S));
        assert_eq!(g.to_string(), "..++\nB+..\n...T");
    }

    #[test]
    fn blocked_moves_leave_boat_in_place() {
        let mut g = small();
        let start = g.boat();
        assert!(!g.move_boat(Direction::N));
        assert!(!g.move_boat(Direction::W));
        assert!(!g.move_boat(Direction::NW));
        assert!(!g.move_boat(Direction::SE));
        assert_eq!(g.boat(), start);
        assert_eq!(g.cell(g.boat()).pos(), Point::new(0, 0));
    }

    #[test]
    fn treasure_range_query() {
        let g = small();
        let dist = g.distance(g.boat(), g.treasure());
        assert_eq!(dist, 38);
        assert_eq!(g.treasure_within(dist - 1), None);
        assert_eq!(g.treasure_within(dist), Some(g.treasure()));
        assert_eq!(g.treasure_within(dist + 1), Some(g.treasure()));
    }
}
