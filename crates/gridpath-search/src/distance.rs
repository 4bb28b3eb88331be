use gridpath_core::Point;

/// Euclidean (straight-line) distance between two points.
///
/// This is the heuristic of the guided strategy, computed once per cell
/// at search initialization.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dy * dy + dx * dx).sqrt()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_345() {
        let d = euclidean(Point::new(0, 0), Point::new(3, 4));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn euclidean_is_symmetric_and_zero_on_self() {
        let a = Point::new(2, 7);
        let b = Point::new(5, 1);
        assert_eq!(euclidean(a, b), euclidean(b, a));
        assert_eq!(euclidean(a, a), 0.0);
    }

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
        assert_eq!(manhattan(Point::new(-1, 0), Point::new(1, 0)), 2);
    }
}
