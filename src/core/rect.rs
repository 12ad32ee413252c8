use super::vec2::Vec2;

/// Axis-aligned rectangle in viewport pixels (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Square box of half-size `half` centered on `center`
    pub fn around(center: Vec2, half: f64) -> Self {
        Self {
            left: center.x - half,
            top: center.y - half,
            right: center.x + half,
            bottom: center.y + half,
        }
    }

    /// Parse a flat `[left, top, right, bottom, ...]` buffer.
    ///
    /// A trailing partial quad and any quad holding a non-finite value are dropped.
    pub fn from_flat(values: &[f64]) -> Vec<Rect> {
        values
            .chunks_exact(4)
            .map(|q| Rect::new(q[0], q[1], q[2], q[3]))
            .filter(|r| r.is_finite())
            .collect()
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Rectangles without positive width and height are not collidable
    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.right.is_finite() && self.bottom.is_finite()
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }

    /// Inclusive containment of a point
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Nearest point inside the rectangle. Infinite sides leave that axis free.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.max(self.left).min(self.right), p.y.max(self.top).min(self.bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_drops_partial_and_non_finite_quads() {
        let rects = Rect::from_flat(&[
            0.0, 0.0, 10.0, 10.0,
            f64::NAN, 0.0, 1.0, 1.0,
            5.0, 5.0, 6.0, 6.0,
            1.0, 2.0,
        ]);
        assert_eq!(rects, vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 5.0, 6.0, 6.0)]);
    }

    #[test]
    fn clamp_pulls_points_onto_the_box() {
        let r = Rect::new(25.0, 25.0, 975.0, f64::INFINITY);
        assert_eq!(r.clamp(Vec2::new(500.0, 10.0)), Vec2::new(500.0, 25.0));
        assert_eq!(r.clamp(Vec2::new(990.0, 5000.0)), Vec2::new(975.0, 5000.0));
        assert!(r.contains(Vec2::new(25.0, 1e9)));
        assert!(!r.contains(Vec2::new(24.9, 30.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(a.overlaps(&Rect::new(9.5, 9.5, 20.0, 20.0)));
    }

    #[test]
    fn around_builds_centered_box() {
        let r = Rect::around(Vec2::new(100.0, 50.0), 24.0);
        assert_eq!(r, Rect::new(76.0, 26.0, 124.0, 74.0));
        assert!(r.has_area());
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).has_area());
    }
}
