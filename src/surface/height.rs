use clap::ValueEnum;

/// Built-in menu of plottable height fields `y = h(x, z)`.
///
/// [`render`](crate::render) itself is generic over any `Fn(f32, f32) -> f32`;
/// this enum only backs the viewer's `--surface` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeightField {
    /// `cos(x) * sin(z)`
    Waves,
    /// `exp(cos(x) + sin(z))`
    Dome,
    /// `sqrt(|x^2 - z^2|)`
    Saddle,
    /// `cos(x * z)`
    Ripple,
}

impl HeightField {
    #[inline]
    pub fn eval(self, x: f32, z: f32) -> f32 {
        match self {
            Self::Waves => x.cos() * z.sin(),
            Self::Dome => (x.cos() + z.sin()).exp(),
            Self::Saddle => (x * x - z * z).abs().sqrt(),
            Self::Ripple => (x * z).cos(),
        }
    }
}
