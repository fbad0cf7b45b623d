//! The floating-horizon sweep: drives the sampler rear-to-front through a
//! fresh [`HorizonBuffer`] and collects the visible wireframe.

use smallvec::SmallVec;

use crate::renderer::{
    Horizon, HorizonBuffer, Point2, RenderError, Segment2, ViewTransform, Visibility,
};
use crate::surface::{Interval, SurfaceSampler};

/// Render one height surface with hidden lines removed.
///
/// Rows are swept from `row_axis.end` down to `row_axis.start` (rear to
/// front under a well-formed `transform`), columns left to right. Each
/// adjacent sample pair becomes a candidate segment that is kept whole,
/// clipped against a horizon, or dropped; kept portions immediately tighten
/// the horizons for nearer rows. The first and last samples of consecutive
/// rows are joined by silhouette connectors that bypass classification and
/// never touch the horizons.
///
/// Returns the emitted segments in sweep order, or
/// [`RenderError::OutOfViewport`] the moment any sample projects outside the
/// viewport columns. Partial results are discarded because a horizon built
/// from an incomplete sweep would corrupt every later occlusion decision.
///
/// Interval validity (`step != 0`, sign matching `end - start`) is a caller
/// precondition; panics from a misbehaving `height` propagate unmodified.
pub fn render<F>(
    row_axis: Interval,
    col_axis: Interval,
    height: F,
    transform: &ViewTransform,
    viewport_w: usize,
    viewport_h: usize,
) -> Result<Vec<Segment2>, RenderError>
where
    F: Fn(f32, f32) -> f32,
{
    let sampler = SurfaceSampler::new(row_axis, col_axis, height);
    let mut horizon = HorizonBuffer::new(viewport_w, viewport_h);
    let mut segments = Vec::new();

    // first/last projected point of the previous row
    let mut left_edge: Option<Point2> = None;
    let mut right_edge: Option<Point2> = None;

    for row in sampler.rows() {
        let mut prev: Option<(Point2, Visibility)> = None;

        for sample in sampler.row_points(row) {
            let curr = transform.project(sample);
            let flag_curr = horizon.classify(curr);
            if flag_curr == Visibility::OutOfBounds {
                return Err(RenderError::OutOfViewport {
                    x: curr.x,
                    width: viewport_w,
                });
            }

            match prev {
                None => {
                    // left silhouette connector: unconditional, no update
                    if let Some(edge) = left_edge {
                        segments.push(Segment2::new(edge, curr));
                    }
                    left_edge = Some(curr);
                }
                Some((prev_pt, flag_prev)) => {
                    for seg in visible_parts(&horizon, prev_pt, flag_prev, curr, flag_curr) {
                        segments.push(seg);
                        horizon.update(seg);
                    }
                }
            }
            prev = Some((curr, flag_curr));
        }

        if let Some((last, _)) = prev {
            if let Some(edge) = right_edge {
                segments.push(Segment2::new(edge, last));
            }
            right_edge = Some(last);
        }
    }

    Ok(segments)
}

/// Resolve one candidate pair into its visible sub-segments (zero, one or
/// two). Equal non-hidden flags keep the segment whole; differing flags clip
/// against whichever horizons the flags name. Intersections are computed
/// against the pre-update thresholds, which is safe because the endpoints'
/// classifications guarantee each crossing exists.
fn visible_parts(
    horizon: &HorizonBuffer,
    prev: Point2,
    flag_prev: Visibility,
    curr: Point2,
    flag_curr: Visibility,
) -> SmallVec<[Segment2; 2]> {
    use Visibility::{Hidden, LowerVisible, UpperVisible};

    let mut out = SmallVec::new();
    if flag_prev == flag_curr {
        if flag_prev != Hidden {
            out.push(Segment2::new(prev, curr));
        }
        return out;
    }

    if flag_prev == LowerVisible || flag_curr == LowerVisible {
        let hit = horizon.intersect(prev, curr, Horizon::Lower);
        if flag_prev == LowerVisible {
            out.push(Segment2::new(prev, hit));
        }
        if flag_curr == LowerVisible {
            out.push(Segment2::new(hit, curr));
        }
    }
    if flag_prev == UpperVisible || flag_curr == UpperVisible {
        let hit = horizon.intersect(prev, curr, Horizon::Upper);
        if flag_prev == UpperVisible {
            out.push(Segment2::new(prev, hit));
        }
        if flag_curr == UpperVisible {
            out.push(Segment2::new(hit, curr));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, vec2, vec3};

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment2 {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// `(u, h, v) -> (u*10 + 50, h*10 + 50)`
    fn flat_view() -> ViewTransform {
        ViewTransform::compose(Vec3::ZERO, 10.0, vec2(50.0, 50.0))
    }

    #[test]
    fn single_flat_row_is_fully_visible_with_no_connectors() {
        let got = render(
            Interval::new(0.0, 0.0, 1.0),
            Interval::new(-1.0, 1.0, 1.0),
            |_, _| 0.0,
            &flat_view(),
            100,
            100,
        )
        .unwrap();
        // one row of three collinear samples, connectors skipped since the
        // left/right edge points start unset
        assert_eq!(got, vec![seg(40, 50, 50, 50), seg(50, 50, 60, 50)]);
    }

    #[test]
    fn constant_field_emits_every_candidate_plus_connectors() {
        let rows = 3usize;
        let cols = 4usize;
        let got = render(
            Interval::new(0.0, 2.0, 1.0),
            Interval::new(0.0, 3.0, 1.0),
            |_, _| 0.0,
            &flat_view(),
            200,
            200,
        )
        .unwrap();
        assert_eq!(got.len(), rows * (cols - 1) + 2 * (rows - 1));
    }

    /// Two overlapping rows projecting onto the same screen row: exact
    /// equality against the horizon counts as visible, so the nearer row is
    /// *not* swallowed by the farther one.
    #[test]
    fn equal_row_overlap_keeps_both_rows() {
        let got = render(
            Interval::new(0.0, 1.0, 1.0),
            Interval::new(0.0, 2.0, 1.0),
            |_, _| 0.0,
            &flat_view(),
            100,
            100,
        )
        .unwrap();
        let interior = seg(50, 50, 60, 50);
        assert_eq!(
            got.iter().filter(|&&s| s == interior).count(),
            2,
            "both rows must re-emit the shared segment"
        );
    }

    /// Three rows at staggered heights: the middle row rises above the rear
    /// one, the front row falls strictly between the accumulated horizons
    /// and is dropped except for its silhouette connectors.
    #[test]
    fn fully_occluded_row_emits_only_connectors() {
        let height = |_: f32, z: f32| match z as i32 {
            2 => 0.0,
            1 => 2.0,
            _ => 1.0,
        };
        let got = render(
            Interval::new(0.0, 2.0, 1.0),
            Interval::new(0.0, 2.0, 1.0),
            height,
            &flat_view(),
            100,
            100,
        )
        .unwrap();
        assert_eq!(
            got,
            vec![
                // rear row, y = 50
                seg(50, 50, 60, 50),
                seg(60, 50, 70, 50),
                // middle row, y = 70, above the converged horizon
                seg(50, 50, 50, 70), // left connector
                seg(50, 70, 60, 70),
                seg(60, 70, 70, 70),
                seg(70, 50, 70, 70), // right connector
                // front row, y = 60, hidden between lower=50 and upper=70
                seg(50, 70, 50, 60),
                seg(70, 70, 70, 60),
            ]
        );
    }

    /// A row that crosses from above the upper horizon to below the lower
    /// one in a single candidate pair must split into two clipped pieces.
    #[test]
    fn mixed_flags_clip_against_both_horizons() {
        let height = |x: f32, z: f32| {
            if z as i32 == 1 {
                2.0
            } else if x < 1.0 {
                3.0
            } else {
                1.0
            }
        };
        let got = render(
            Interval::new(0.0, 1.0, 1.0),
            Interval::new(0.0, 2.0, 1.0),
            height,
            &flat_view(),
            200,
            200,
        )
        .unwrap();
        // rear row converges both horizons to y = 70; the front row steps
        // from y = 80 (upper-visible) to y = 60 (lower-visible) between
        // columns 50 and 60, crossing both horizons at (55, 70)
        assert!(got.contains(&seg(55, 70, 60, 60)), "lower-clipped piece");
        assert!(got.contains(&seg(50, 80, 55, 70)), "upper-clipped piece");
        assert!(
            !got.contains(&seg(50, 80, 60, 60)),
            "unclipped candidate must not leak"
        );
    }

    #[test]
    fn monotonic_occlusion_across_rows() {
        // a rising front row can only tighten the horizons; everything the
        // rear row emitted stays, and the front row is visible in full
        let height = |_: f32, z: f32| z * -1.0;
        let got = render(
            Interval::new(0.0, 1.0, 1.0),
            Interval::new(0.0, 2.0, 1.0),
            height,
            &flat_view(),
            100,
            100,
        )
        .unwrap();
        // rear row z=1 at y=40, front row z=0 at y=50 >= upper(40)
        assert!(got.contains(&seg(50, 40, 60, 40)));
        assert!(got.contains(&seg(50, 50, 60, 50)));
    }

    #[test]
    fn sample_past_viewport_fails_without_partial_output() {
        let result = render(
            Interval::new(0.0, 0.0, 1.0),
            Interval::new(0.0, 5.0, 1.0), // column 5 projects to x = 100
            |_, _| 0.0,
            &flat_view(),
            100,
            100,
        );
        assert_eq!(
            result,
            Err(RenderError::OutOfViewport { x: 100, width: 100 })
        );
    }

    #[test]
    fn large_enough_viewport_never_fails() {
        let view = ViewTransform::compose(vec3(30.0, 15.0, 0.0), 5.0, vec2(200.0, 200.0));
        for field in [
            crate::surface::HeightField::Waves,
            crate::surface::HeightField::Saddle,
            crate::surface::HeightField::Ripple,
        ] {
            let got = render(
                Interval::new(-3.0, 3.0, 0.5),
                Interval::new(-3.0, 3.0, 0.5),
                |x, z| field.eval(x, z),
                &view,
                400,
                400,
            );
            assert!(got.is_ok(), "{field:?} should stay inside a 400x400 viewport");
        }
    }
}
