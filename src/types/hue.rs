//! Hue angle on the bridge's color wheel.

use serde::{Deserialize, Serialize};

/// Hue as the bridge's `hue` attribute.
///
/// The bridge maps the color wheel onto 0-65535: both ends are red, 21845 is
/// green and 43690 is blue. Every `u16` is a valid hue.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Hue {
    pub(crate) value: u16,
}

impl Hue {
    const WHEEL: u32 = 65535;

    pub fn create(value: u16) -> Option<Self> {
        Some(Hue { value })
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    /// Create a Hue from an angle in degrees (0-360).
    ///
    /// Returns `None` if the angle is above 360.
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::Hue;
    ///
    /// assert_eq!(Hue::from_degrees(0).unwrap().value(), 0);
    /// assert_eq!(Hue::from_degrees(120).unwrap().value(), 21845);
    /// assert_eq!(Hue::from_degrees(240).unwrap().value(), 43690);
    /// assert_eq!(Hue::from_degrees(360).unwrap().value(), 65535);
    /// assert!(Hue::from_degrees(361).is_none());
    /// ```
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        if degrees > 360 {
            return None;
        }
        let value = (degrees as u32 * Self::WHEEL + 180) / 360;
        Some(Hue {
            value: value as u16,
        })
    }

    /// The angle in degrees, rounded to the nearest degree.
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::Hue;
    ///
    /// assert_eq!(Hue::create(21845).unwrap().degrees(), 120);
    /// ```
    pub fn degrees(&self) -> u16 {
        ((self.value as u32 * 360 + Self::WHEEL / 2) / Self::WHEEL) as u16
    }
}
