//! Toggle targets: single lights or locally configured light groups.

use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// What a `toggle` acts on.
///
/// Anything that parses as an integer is a light id; everything else names a
/// light group from the config file.
///
/// # Example
///
/// ```
/// use huedo::ToggleTarget;
///
/// assert_eq!("3".parse::<ToggleTarget>().unwrap(), ToggleTarget::Light(3));
/// assert_eq!(
///     "kitchen".parse::<ToggleTarget>().unwrap(),
///     ToggleTarget::Group("kitchen".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleTarget {
    Light(u32),
    Group(String),
}

impl FromStr for ToggleTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::LightGroupNotFound(String::new()));
        }
        Ok(match s.parse::<u32>() {
            Ok(id) => ToggleTarget::Light(id),
            Err(_) => ToggleTarget::Group(s.to_string()),
        })
    }
}

impl fmt::Display for ToggleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleTarget::Light(id) => write!(f, "light {id}"),
            ToggleTarget::Group(name) => write!(f, "light group {name}"),
        }
    }
}
