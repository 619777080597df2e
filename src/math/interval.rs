/// Closed numeric range `[start, end]` with `start <= end`.
///
/// Constructing from two values in either order stores them sorted.
/// Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates the interval spanning `a` and `b`, in any order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Zero-length interval at `x`.
    #[must_use]
    pub fn point(x: f64) -> Self {
        Self { start: x, end: x }
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Smallest interval containing both `self` and `x`.
    #[must_use]
    pub fn add_point(self, x: f64) -> Self {
        if self.contains(x) {
            self
        } else if x < self.start {
            Self { start: x, ..self }
        } else {
            Self { end: x, ..self }
        }
    }

    /// Smallest interval containing both intervals.
    #[must_use]
    pub fn add_interval(self, other: Self) -> Self {
        self.add_point(other.start).add_point(other.end)
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// Clamps `x` into the interval.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_bounds() {
        let iv = Interval::new(5.0, 2.0);
        assert_eq!(iv.start(), 2.0);
        assert_eq!(iv.end(), 5.0);
        assert_eq!(iv.length(), 3.0);
    }

    #[test]
    fn add_point_inside_is_identity() {
        let iv = Interval::new(0.0, 10.0);
        assert_eq!(iv.add_point(4.0), iv);
    }

    #[test]
    fn add_point_extends_the_exceeded_bound() {
        let iv = Interval::new(0.0, 1.0);
        assert_eq!(iv.add_point(-2.0), Interval::new(-2.0, 1.0));
        assert_eq!(iv.add_point(3.0), Interval::new(0.0, 3.0));
    }

    #[test]
    fn add_interval_never_shrinks() {
        let samples = [
            (Interval::new(0.0, 1.0), Interval::new(0.25, 0.5)),
            (Interval::new(0.0, 1.0), Interval::new(-1.0, 2.0)),
            (Interval::new(3.0, 4.0), Interval::new(-4.0, -3.0)),
            (Interval::point(1.0), Interval::point(1.0)),
        ];
        for (a, b) in samples {
            let u = a.add_interval(b);
            assert!(u.start() <= u.end());
            assert!(u.start() <= a.start() && u.end() >= a.end());
            assert!(u.contains(b.start()) && u.contains(b.end()));
            assert!(u.length() >= a.length());
        }
    }

    #[test]
    fn zero_length_interval_contains_its_point() {
        let iv = Interval::point(2.5);
        assert_eq!(iv.length(), 0.0);
        assert!(iv.contains(2.5));
        assert!(!iv.contains(2.6));
        assert_eq!(iv.clamp(7.0), 2.5);
    }
}
