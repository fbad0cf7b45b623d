//! Floating-horizon hidden-line removal for single-valued height surfaces.
//!
//! A surface `y = h(x, z)` is sampled over a parameter grid, projected to the
//! viewport row by row from the rear, and reduced to the wireframe segments
//! that survive occlusion by nearer rows. Two per-column threshold arrays
//! (the upper and lower horizons) stand in for a full depth buffer, which is
//! valid exactly because the sweep order is back-to-front.
//!
//! ```
//! use glam::{vec2, vec3};
//! use horizon_rs::{Interval, ViewTransform, render};
//!
//! let view = ViewTransform::compose(vec3(30.0, 15.0, 0.0), 8.0, vec2(320.0, 240.0));
//! let segments = render(
//!     Interval::new(-5.0, 5.0, 0.5),  // depth rows, swept rear to front
//!     Interval::new(-5.0, 5.0, 0.25), // columns, swept left to right
//!     |x, z| x.cos() * z.sin(),
//!     &view,
//!     640,
//!     480,
//! )?;
//! assert!(!segments.is_empty());
//! # Ok::<(), horizon_rs::RenderError>(())
//! ```

pub mod renderer;
pub mod surface;

pub use renderer::{
    Horizon, HorizonBuffer, Point2, RenderError, Segment2, ViewTransform, Visibility, render,
};
pub use surface::{HeightField, Interval, SurfaceSampler};
