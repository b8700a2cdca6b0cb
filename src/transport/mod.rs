//! Request transport abstraction.
//!
//! [`HueClient`](crate::HueClient) sends every bridge request through a
//! [`Transport`]. The default is [`HttpTransport`], a blocking HTTPS client;
//! anything that can answer a request with a status and a body can stand in
//! for it.

use serde_json::Value;

use crate::errors::Error;
use crate::method::Method;

mod http;

pub use http::HttpTransport;

#[cfg(test)]
pub(crate) mod fake;

/// A raw reply from the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Reply {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for sending one request to the bridge.
///
/// Implementations send `body` as JSON when it is `Some` and return the
/// reply without interpreting it.
pub trait Transport {
    fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Reply, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Reply, Error> {
        (**self).send(method, url, body)
    }
}
