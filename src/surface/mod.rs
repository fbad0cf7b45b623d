//! Parameter-space side of the plotter: the swept axes, the built-in surface
//! menu and the grid sampler. Nothing in here knows about the viewport.

pub mod height;
pub mod interval;
pub mod sampler;

pub use height::HeightField;
pub use interval::Interval;
pub use sampler::SurfaceSampler;
