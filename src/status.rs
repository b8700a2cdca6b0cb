//! Light state as reported by the bridge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Brightness, Hue, PowerMode, Saturation};

/// The `state` object of a light resource.
///
/// Only `on` is present on every light; on/off plugs have no brightness
/// and white-only bulbs have no hue or saturation. Fields this type does not
/// name are kept in `extra`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LightStatus {
    pub(crate) on: bool,
    pub(crate) bri: Option<u8>,
    pub(crate) hue: Option<u16>,
    pub(crate) sat: Option<u8>,
    pub(crate) reachable: Option<bool>,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl LightStatus {
    /// Check if the light is on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn power(&self) -> PowerMode {
        PowerMode::from(self.on)
    }

    /// Get the current brightness, if the light dims.
    pub fn brightness(&self) -> Option<Brightness> {
        self.bri.and_then(Brightness::create)
    }

    /// Brightness exactly as the bridge reported it, including values
    /// outside the settable range such as `0`.
    pub fn raw_brightness(&self) -> Option<u8> {
        self.bri
    }

    /// Get the current hue, if the light has color.
    pub fn hue(&self) -> Option<Hue> {
        self.hue.and_then(Hue::create)
    }

    /// Get the current saturation, if the light has color.
    pub fn saturation(&self) -> Option<Saturation> {
        self.sat.and_then(Saturation::create)
    }

    /// Whether the bridge can currently reach the light.
    pub fn reachable(&self) -> Option<bool> {
        self.reachable
    }

    /// Attributes without a typed accessor, such as `ct` or `colormode`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
