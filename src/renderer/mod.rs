//! Screen-space side of the algorithm.
//!
//! The surface module produces grid samples; everything here works in integer
//! viewport coordinates: projecting samples ([`projection`]), tracking the
//! per-column visibility thresholds ([`horizon`]) and driving the sweep that
//! emits the visible wireframe ([`floating`]).

pub mod floating;
pub mod horizon;
pub mod projection;

pub use floating::render;
pub use horizon::HorizonBuffer;
pub use projection::ViewTransform;

use thiserror::Error;

/// Viewport pixel coordinate. Columns grow right, rows grow down; the
/// algorithm only relies on columns being in `[0, width)` and rows being
/// comparable integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One emitted wireframe segment, the renderer's sole output unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment2 {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment2 {
    pub const fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }
}

/// Where a projected sample sits relative to the current horizons.
///
/// A closed enum rather than integer sentinels, so every caller is forced
/// through all four cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// At or below the lower horizon of its column.
    LowerVisible,
    /// At or above the upper horizon of its column.
    UpperVisible,
    /// Strictly between the two horizons: occluded by nearer rows.
    Hidden,
    /// Column outside the viewport; terminal for the whole render call.
    OutOfBounds,
}

/// Selects which threshold array an intersection is computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizon {
    Upper,
    Lower,
}

/// The one error intrinsic to the renderer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A sample projected outside the viewport columns. Unrecoverable within
    /// the call: a horizon built from a partial sweep would corrupt every
    /// later occlusion decision, so no partial segment list is returned.
    #[error("sample projects to column {x}, outside the {width}-column viewport")]
    OutOfViewport { x: i32, width: usize },
}
