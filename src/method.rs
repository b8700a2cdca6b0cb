//! HTTP methods understood by the bridge API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::errors::Error;

/// An HTTP method for a bridge request.
///
/// # Examples
///
/// ```
/// use huedo::Method;
///
/// assert_eq!(Method::parse("put").unwrap(), Method::Put);
/// assert_eq!(Method::Delete.to_string(), "DELETE");
/// assert!(Method::parse("brew").is_err());
/// ```
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Parse a method name, ignoring case.
    pub fn parse(value: &str) -> Result<Self, Error> {
        Method::from_str(value.trim()).map_err(|_| Error::InvalidMethod(value.to_string()))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}
