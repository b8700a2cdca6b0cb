//! Light resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::status::LightStatus;

/// A light as described by `GET lights/<id>`.
///
/// # Example
///
/// ```
/// use huedo::Light;
///
/// let light: Light = serde_json::from_str(
///     r#"{"name": "Desk", "swversion": "1.50.2", "state": {"on": true, "bri": 200}}"#,
/// ).unwrap();
///
/// assert_eq!(light.name(), "Desk");
/// assert!(light.status().is_on());
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Light {
    name: String,
    state: LightStatus,
    swversion: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    modelid: Option<String>,
    uniqueid: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Light {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The light's current state.
    pub fn status(&self) -> &LightStatus {
        &self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    pub fn software_version(&self) -> Option<&str> {
        self.swversion.as_deref()
    }

    /// Product category such as `Extended color light`.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn model_id(&self) -> Option<&str> {
        self.modelid.as_deref()
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.uniqueid.as_deref()
    }

    /// Attributes without a typed accessor, such as `capabilities`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// All lights known to the bridge, keyed by light id.
///
/// The bridge keys lights by numeric strings; entries are ordered by their
/// numeric value so `"10"` sorts after `"9"`.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Lights(BTreeMap<String, Light>);

impl Lights {
    pub fn get(&self, id: &str) -> Option<&Light> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(id, light)` pairs in numeric id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Light)> {
        let mut entries: Vec<(&str, &Light)> =
            self.0.iter().map(|(id, light)| (id.as_str(), light)).collect();
        entries.sort_by(|a, b| id_order(a.0).cmp(&id_order(b.0)));
        entries.into_iter()
    }
}

fn id_order(id: &str) -> (u64, &str) {
    (id.parse().unwrap_or(u64::MAX), id)
}
