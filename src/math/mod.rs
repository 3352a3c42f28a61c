mod color;
mod spline;

pub use color::hsl_to_rgb;
pub use spline::CatmullRom;
