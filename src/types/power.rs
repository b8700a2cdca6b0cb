//! Power mode for light control.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Power state for a light.
///
/// Parses case-insensitively from `on` and `off`.
///
/// ```
/// use std::str::FromStr;
/// use huedo::PowerMode;
///
/// assert_eq!(PowerMode::from_str("ON").unwrap(), PowerMode::On);
/// assert_eq!(PowerMode::Off.to_string(), "off");
/// assert!(PowerMode::from_str("dim").is_err());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PowerMode {
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

impl PowerMode {
    pub fn is_on(&self) -> bool {
        matches!(self, PowerMode::On)
    }
}

impl From<bool> for PowerMode {
    fn from(on: bool) -> Self {
        if on { PowerMode::On } else { PowerMode::Off }
    }
}
