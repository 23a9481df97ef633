use sonar_core::Point;

/// Cost of one orthogonal step.
pub const ORTHOGONAL_COST: u32 = 10;

/// Cost of one diagonal step (10·√2, rounded).
pub const DIAGONAL_COST: u32 = 14;

/// Octile distance between two points, scaled so that an orthogonal step
/// costs [`ORTHOGONAL_COST`] and a diagonal step costs [`DIAGONAL_COST`].
///
/// Serves both as the edge cost between adjacent cells and as the search
/// heuristic, which keeps the heuristic consistent for 8-way movement.
#[inline]
pub fn octile(a: Point, b: Point) -> u32 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    let diagonal = dx.min(dy);
    let straight = dx.max(dy) - diagonal;
    DIAGONAL_COST * diagonal + ORTHOGONAL_COST * straight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_mixes_diagonal_and_straight_steps() {
        let a = Point::new(1, 2);
        assert_eq!(octile(a, Point::new(4, 3)), 34);
        assert_eq!(octile(a, Point::new(1, 2)), 0);
        assert_eq!(octile(a, Point::new(1, 10)), 80);
        assert_eq!(octile(a, Point::new(9, 2)), 80);
    }

    #[test]
    fn octile_is_symmetric() {
        let pts = [
            Point::new(0, 0),
            Point::new(3, 2),
            Point::new(7, 1),
            Point::new(2, 9),
        ];
        for &a in &pts {
            for &b in &pts {
                assert_eq!(octile(a, b), octile(b, a));
            }
        }
    }
}
