//! Bridge response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;

/// Error type the bridge returns while the link button has not been pressed.
pub const LINK_BUTTON_NOT_PRESSED: u16 = 101;

/// An error item returned by the bridge.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: u16,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Bridge {
            kind: err.kind,
            address: err.address,
            description: err.description,
        }
    }
}

/// One item of a bridge write or pairing response.
///
/// Writes answer with a list such as
/// `[{"success": {"/lights/1/state/on": true}}]` or
/// `[{"error": {"type": 3, "address": "/lights/9", "description": "..."}}]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ApiResult {
    Success(Value),
    Error(ApiError),
}

/// Returns the first error item in a bridge reply.
///
/// Reads of missing resources come back as a list of error items in place
/// of the resource object, so any reply shape is accepted here.
pub(crate) fn first_error(value: &Value) -> Option<ApiError> {
    value
        .as_array()?
        .iter()
        .filter_map(|item| item.get("error"))
        .find_map(|err| serde_json::from_value(err.clone()).ok())
}

/// Fails with the first error item in a bridge reply, if there is one.
pub(crate) fn check(value: &Value) -> Result<(), Error> {
    match first_error(value) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Decodes the first item of a list reply.
///
/// Items after the first are not looked at; a reply that is not a list or
/// whose first item is neither a success nor an error is unexpected.
pub(crate) fn first_result(value: &Value) -> Result<ApiResult, Error> {
    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| serde_json::from_value(item.clone()).ok())
        .ok_or_else(|| Error::UnexpectedResponse(value.to_string()))
}
