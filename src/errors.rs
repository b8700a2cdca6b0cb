use std::path::{Path, PathBuf};

/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// Failed to serialize the config file.
    #[error("failed to dump yaml: {0}")]
    YamlDump(serde_yaml::Error),

    /// Failed to parse the config file.
    #[error("failed to load yaml: {0}")]
    YamlLoad(serde_yaml::Error),

    /// A filesystem operation on the config file failed.
    #[error("config {action} error for {}: {err}", .path.display())]
    Config {
        action: String,
        path: PathBuf,
        err: std::io::Error,
    },

    /// The HTTP request to the bridge failed before a reply arrived.
    #[error("http {action} error: {err}")]
    Http { action: String, err: reqwest::Error },

    /// The bridge replied with a status other than 200.
    #[error("got unexpected response code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The bridge answered with an error item.
    #[error("{description} (type {kind}, address {address})")]
    Bridge {
        kind: u16,
        address: String,
        description: String,
    },

    /// The bridge reply did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// No bridge IP or username is stored yet.
    #[error("no bridge configured; run `huedo init <hub_ip>` first")]
    NotConfigured,

    /// The named light group is not in the config file.
    #[error("unconfigured light group {0}")]
    LightGroupNotFound(String),

    /// The link button was not pressed while pairing was retried.
    #[error("link button not pressed after {attempts} attempts")]
    LinkButtonTimeout { attempts: u32 },

    /// The string is not a supported HTTP method.
    #[error("invalid http method: {0}")]
    InvalidMethod(String),

    /// A raw request body was not valid JSON.
    #[error("body specified must be valid JSON: {0}")]
    InvalidBody(serde_json::Error),
}

impl Error {
    /// Create a new config file error
    pub fn config(action: &str, path: &Path, err: std::io::Error) -> Self {
        Error::Config {
            action: action.to_string(),
            path: path.to_path_buf(),
            err,
        }
    }

    /// Create a new http error
    pub fn http(action: &str, err: reqwest::Error) -> Self {
        Error::Http {
            action: action.to_string(),
            err,
        }
    }

    /// Returns the bridge error type, if this is a bridge error.
    pub fn bridge_kind(&self) -> Option<u16> {
        match self {
            Error::Bridge { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
