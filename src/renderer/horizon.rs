//! The floating horizons: one upper and one lower threshold row per viewport
//! column, standing in for a depth buffer while rows are swept rear to front.

use crate::renderer::{Horizon, Point2, Segment2, Visibility};

/// Per-column visibility thresholds for one render call.
///
/// `upper` starts at `0` and `lower` at the viewport height (the two screen
/// extremes), so the first sample touching a column is always visible. Every
/// *emitted* segment (and only those) is folded in via [`update`], after
/// which `upper[c]` is the maximum row drawn across column `c` and `lower[c]`
/// the minimum.
///
/// A buffer is created fresh per render call and never shared; concurrent
/// renders each build their own.
///
/// [`update`]: HorizonBuffer::update
pub struct HorizonBuffer {
    upper: Vec<i32>,
    lower: Vec<i32>,
}

impl HorizonBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            upper: vec![0; width],
            lower: vec![height as i32; width],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.upper.len()
    }

    /// Classify a point against the current thresholds of its column.
    ///
    /// The lower test runs first: while a column's thresholds have not yet
    /// converged both tests can pass, and the tie resolves in favour of
    /// `LowerVisible` (see `lower_wins_before_horizons_converge` below).
    pub fn classify(&self, p: Point2) -> Visibility {
        if p.x < 0 || p.x as usize >= self.upper.len() {
            return Visibility::OutOfBounds;
        }
        let col = p.x as usize;
        if p.y <= self.lower[col] {
            Visibility::LowerVisible
        } else if p.y >= self.upper[col] {
            Visibility::UpperVisible
        } else {
            Visibility::Hidden
        }
    }

    /// Fold an emitted segment into the thresholds: every column the segment
    /// spans (endpoints included) raises `upper` and lowers `lower` toward
    /// the segment's interpolated row there.
    pub fn update(&mut self, seg: Segment2) {
        let Segment2 { p1, p2 } = seg;
        if p1.x == p2.x {
            let col = p1.x as usize;
            self.upper[col] = self.upper[col].max(p1.y.max(p2.y));
            self.lower[col] = self.lower[col].min(p1.y.min(p2.y));
            return;
        }
        let slope = (p2.y - p1.y) as f32 / (p2.x - p1.x) as f32;
        let (x_l, x_r) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
        for x in x_l..=x_r {
            let y = (slope * (x - p1.x) as f32 + p1.y as f32).round() as i32;
            let col = x as usize;
            self.upper[col] = self.upper[col].max(y);
            self.lower[col] = self.lower[col].min(y);
        }
    }

    /// Where the line through `p1, p2` crosses the chosen horizon.
    ///
    /// Only meaningful when the endpoints classify differently with respect
    /// to `which`; that guarantees the `dy != d_horizon` divisor below. Both
    /// intermediate results are rounded half-away-from-zero (`f32::round`)
    /// before the integer point is built, and the crossing is symmetric under
    /// endpoint swap.
    pub fn intersect(&self, p1: Point2, p2: Point2, which: Horizon) -> Point2 {
        let hz = match which {
            Horizon::Upper => &self.upper,
            Horizon::Lower => &self.lower,
        };
        let h1 = hz[p1.x as usize];
        let h2 = hz[p2.x as usize];
        if p1.y == h1 && p2.y == h2 {
            return p1;
        }
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        if dx == 0 {
            return Point2::new(p2.x, h2);
        }
        let d_horizon = h2 - h1;
        let xi = p1.x - ((dx * (p1.y - h1)) as f32 / (dy - d_horizon) as f32).round() as i32;
        let yi = ((xi - p1.x) as f32 * dy as f32 / dx as f32 + p1.y as f32).round() as i32;
        Point2::new(xi, yi)
    }
}
