/// One swept parameter axis: `start`, `end` and a constant `step`.
///
/// Enumeration is index-based rather than accumulate-and-compare: the sample
/// count is fixed up front as `round((end - start) / step) + 1` and each
/// sample is `start + i * step`, so both bounds are visited exactly once no
/// matter how the step divides the span in floating point.
///
/// `step` must be nonzero and carry the same sign as `end - start`; that is a
/// caller precondition (the viewer validates user input before building one)
/// and is not re-checked here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
    pub step: f32,
}

impl Interval {
    pub const fn new(start: f32, end: f32, step: f32) -> Self {
        Self { start, end, step }
    }

    /// Number of grid samples on this axis, both bounds included.
    #[inline]
    pub fn samples(&self) -> usize {
        ((self.end - self.start) / self.step).round() as usize + 1
    }

    /// The `i`-th sample counted from `start`.
    #[inline]
    pub fn sample(&self, i: usize) -> f32 {
        self.start + i as f32 * self.step
    }

    /// Sweep from `start` up to `end`.
    pub fn ascending(&self) -> impl Iterator<Item = f32> {
        let axis = *self;
        (0..axis.samples()).map(move |i| axis.sample(i))
    }

    /// Sweep from `end` down to `start`.
    pub fn descending(&self) -> impl Iterator<Item = f32> {
        let axis = *self;
        (0..axis.samples()).rev().map(move |i| axis.sample(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bounds_hit_despite_drifting_step() {
        // 0.1 is not representable in binary; an accumulate-and-compare
        // sweep can miss the final bound here.
        let axis = Interval::new(0.0, 1.0, 0.1);
        let vals: Vec<f32> = axis.ascending().collect();
        assert_eq!(vals.len(), 11);
        assert_eq!(vals[0], 0.0);
        assert!((vals[10] - 1.0).abs() < 1e-5, "last sample {} != 1.0", vals[10]);
        assert!(vals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn descending_mirrors_ascending() {
        let axis = Interval::new(-10.0, 10.0, 0.5);
        let up: Vec<f32> = axis.ascending().collect();
        let mut down: Vec<f32> = axis.descending().collect();
        down.reverse();
        assert_eq!(up.len(), 41);
        assert_eq!(up, down);
    }

    #[test]
    fn degenerate_interval_yields_one_sample() {
        let axis = Interval::new(3.0, 3.0, 1.0);
        assert_eq!(axis.ascending().collect::<Vec<_>>(), vec![3.0]);
    }
}
