//! Color saturation.

use serde::{Deserialize, Serialize};

/// Color saturation as the bridge's `sat` attribute, from 0 (white) to 254
/// (fully colored).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Saturation {
    pub(crate) value: u8,
}

impl Saturation {
    const MAX: u8 = 254;

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new Saturation with the given value.
    ///
    /// Returns `None` if value is above 254.
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::Saturation;
    ///
    /// assert!(Saturation::create(0).is_some());
    /// assert!(Saturation::create(254).is_some());
    /// assert!(Saturation::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Saturation { value })
        } else {
            None
        }
    }

    /// Convert a percentage (0-100) to the bridge's scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::Saturation;
    ///
    /// assert_eq!(Saturation::from_percent(100).unwrap().value(), 254);
    /// assert_eq!(Saturation::from_percent(0).unwrap().value(), 0);
    /// assert!(Saturation::from_percent(101).is_none());
    /// ```
    pub fn from_percent(percent: u8) -> Option<Self> {
        if percent > 100 {
            return None;
        }
        let value = (percent as u16 * Self::MAX as u16 + 50) / 100;
        Self::create(value as u8)
    }
}
