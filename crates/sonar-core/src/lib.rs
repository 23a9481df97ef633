//! Geometry types shared by the sonar treasure hunt crates.
//!
//! Provides [`Point`] and [`Range`] for addressing cells of a sea map, and
//! [`Direction`] for the eight compass moves a boat can make.

pub mod direction;
pub mod geom;

pub use direction::{Direction, ParseDirectionError};
pub use geom::{Point, Range};
