//! Value types for light control parameters.

mod brightness;
mod hue;
mod power;
mod saturation;

pub use brightness::Brightness;
pub use hue::Hue;
pub use power::PowerMode;
pub use saturation::Saturation;
