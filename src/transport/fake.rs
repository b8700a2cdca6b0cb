//! Scripted transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use super::{Reply, Transport};
use crate::errors::Error;
use crate::method::Method;

/// A request the fake transport received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sent {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Answers requests from a queue of replies and records what was sent.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<VecDeque<Reply>>,
    sent: RefCell<Vec<Sent>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 reply with a JSON body.
    pub fn reply(self, body: Value) -> Self {
        self.reply_raw(Reply::new(200, body.to_string()))
    }

    pub fn reply_raw(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Reply, Error> {
        self.sent.borrow_mut().push(Sent {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::UnexpectedResponse(format!("no reply scripted for {url}")))
    }
}
