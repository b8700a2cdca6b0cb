//! State change body for Hue lights.

use serde::{Deserialize, Serialize};

use crate::types::{Brightness, Hue, PowerMode, Saturation};

/// A state change to send to a light.
///
/// Only the attributes that were set are sent, so a state can change the
/// brightness without touching the power or color.
///
/// # Creating States
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use huedo::{LightState, PowerMode};
///    let state = LightState::from(&PowerMode::Off);
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use huedo::{LightState, Brightness, Hue};
///    let mut state = LightState::new();
///    state.brightness(&Brightness::create(200).unwrap());
///    state.hue(&Hue::from_degrees(240).unwrap());
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LightState {
    pub(crate) on: Option<bool>,
    pub(crate) hue: Option<u16>,
    pub(crate) bri: Option<u8>,
    pub(crate) sat: Option<u8>,
}

impl LightState {
    /// Create a new empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::LightState;
    ///
    /// let state = LightState::new();
    /// assert_eq!(state.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this state sets at least one attribute.
    pub fn is_valid(&self) -> bool {
        self.on.is_some() || self.hue.is_some() || self.bri.is_some() || self.sat.is_some()
    }

    /// Switch the light on or off.
    ///
    /// # Examples
    ///
    /// ```
    /// use huedo::{LightState, PowerMode};
    ///
    /// let mut state = LightState::new();
    /// state.power(&PowerMode::On);
    /// assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"on":true}"#);
    /// ```
    pub fn power(&mut self, power: &PowerMode) {
        self.on = Some(power.is_on());
    }

    pub fn hue(&mut self, hue: &Hue) {
        self.hue = Some(hue.value);
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.bri = Some(brightness.value);
    }

    pub fn saturation(&mut self, saturation: &Saturation) {
        self.sat = Some(saturation.value);
    }
}

impl From<&PowerMode> for LightState {
    fn from(power: &PowerMode) -> Self {
        let mut s = LightState::new();
        s.power(power);
        s
    }
}

impl From<&Brightness> for LightState {
    fn from(brightness: &Brightness) -> Self {
        let mut s = LightState::new();
        s.brightness(brightness);
        s
    }
}

impl From<&Hue> for LightState {
    fn from(hue: &Hue) -> Self {
        let mut s = LightState::new();
        s.hue(hue);
        s
    }
}

impl From<&Saturation> for LightState {
    fn from(saturation: &Saturation) -> Self {
        let mut s = LightState::new();
        s.saturation(saturation);
        s
    }
}
