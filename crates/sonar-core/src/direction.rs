//! The eight compass directions a boat can sail in.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// A compass direction on the sea map.
///
/// North is towards row 0, east towards increasing column numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    S,
    E,
    W,
    NW,
    NE,
    SW,
    SE,
}

impl Direction {
    /// Every direction, in command-token order.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NW,
        Self::NE,
        Self::SW,
        Self::SE,
    ];

    /// Order in which the search graph enumerates neighbors: the four
    /// orthogonal moves first, then the diagonals.
    pub const NEIGHBOR_ORDER: [Direction; 8] = [
        Self::S,
        Self::N,
        Self::E,
        Self::W,
        Self::SE,
        Self::SW,
        Self::NE,
        Self::NW,
    ];

    /// Unit offset of a single step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Self::N => Point::new(0, -1),
            Self::S => Point::new(0, 1),
            Self::E => Point::new(1, 0),
            Self::W => Point::new(-1, 0),
            Self::NW => Point::new(-1, -1),
            Self::NE => Point::new(1, -1),
            Self::SW => Point::new(-1, 1),
            Self::SE => Point::new(1, 1),
        }
    }

    /// The command token for this direction.
    pub const fn token(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::S => "S",
            Self::E => "E",
            Self::W => "W",
            Self::NW => "NW",
            Self::NE => "NE",
            Self::SW => "SW",
            Self::SE => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.token() == token)
            .ok_or_else(|| ParseDirectionError(token.to_string()))
    }
}

/// A token that is not one of `N, S, E, W, NW, NE, SW, SE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_tokens() {
        for d in Direction::ALL {
            assert_eq!(d.token().parse::<Direction>(), Ok(d));
        }
        assert_eq!(" SW ".parse::<Direction>(), Ok(Direction::SW));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert!("NNE".parse::<Direction>().is_err());
        assert!("n".parse::<Direction>().is_err());
        let err = "".parse::<Direction>().unwrap_err();
        assert_eq!(err, ParseDirectionError(String::new()));
    }

    #[test]
    fn offsets_are_unit_steps() {
        for d in Direction::ALL {
            let o = d.offset();
            assert!(Point::ZERO.is_adjacent(o));
        }
        assert_eq!(Direction::NE.offset(), Point::new(1, -1));
    }

    #[test]
    fn neighbor_order_is_a_permutation() {
        let mut seen: Vec<Point> = Direction::NEIGHBOR_ORDER.iter().map(|d| d.offset()).collect();
        seen.sort_by_key(|p| (p.y, p.x));
        seen.dedup();
        assert_eq!(seen.len(), 8);
        assert_eq!(Direction::NEIGHBOR_ORDER[0], Direction::S);
    }
}
