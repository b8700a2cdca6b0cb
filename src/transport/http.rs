//! Blocking HTTPS transport.

use std::time::Duration;

use log::debug;
use serde_json::Value;

use super::{Reply, Transport};
use crate::errors::Error;
use crate::method::Method;

/// reqwest-based transport for talking to a bridge on the local network.
///
/// The bridge serves HTTPS with a self-signed certificate, so certificate
/// verification is turned off.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| Error::http("build", e))?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Reply, Error> {
        debug!("{} {} body={:?}", method, url, body);

        let mut request = self.client.request(method.into(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| Error::http("send", e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| Error::http("receive", e))?;

        debug!("HTTP {} response: {}", status, body);
        Ok(Reply { status, body })
    }
}
