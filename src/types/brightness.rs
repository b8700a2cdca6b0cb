//! Brightness control for Hue lights.

use serde::{Deserialize, Serialize};

/// Brightness level as the bridge's `bri` attribute, from 1 to 254.
///
/// 1 is the dimmest level the light can show, not off. Use
/// [`PowerMode`](crate::PowerMode) to switch a light off.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl Brightness {
    const MIN: u8 = 1;
    const MAX: u8 = 254;

    /// Create a new Brightness at full level (254).
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::Brightness;
    ///
    /// assert_eq!(Brightness::new().value(), 254);
    /// ```
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (1-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::Brightness;
    ///
    /// assert!(Brightness::create(0).is_none());
    /// assert!(Brightness::create(1).is_some());
    /// assert!(Brightness::create(254).is_some());
    /// assert!(Brightness::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
