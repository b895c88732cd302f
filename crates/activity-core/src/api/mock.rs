//! Mock Activity API
//!
//! Scripted in-memory transport for tests and demos. Records every call so
//! tests can assert how many requests the board issued.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ActivityApi, interpret_catalog, interpret_signup};
use crate::error::{BoardError, Result};
use crate::model::{ActivityCatalog, SignupRequest, SignupResponse};

/// Canned reply for one endpoint
#[derive(Clone, Debug)]
pub enum MockReply {
    /// An HTTP response with a raw body
    Respond { status: u16, body: String },
    /// A transport failure carrying this message
    NetworkError(String),
}

impl MockReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Respond {
            status: 200,
            body: body.into(),
        }
    }

    pub fn json(value: &serde_json::Value) -> Self {
        Self::ok(value.to_string())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Respond {
            status,
            body: body.into(),
        }
    }
}

/// Mock transport with scripted replies
pub struct MockActivityApi {
    catalog_reply: RefCell<MockReply>,
    signup_reply: RefCell<MockReply>,
    catalog_fetches: Cell<usize>,
    signups: RefCell<Vec<SignupRequest>>,
}

impl Default for MockActivityApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockActivityApi {
    /// Empty catalog, every signup accepted
    pub fn new() -> Self {
        Self {
            catalog_reply: RefCell::new(MockReply::ok("{}")),
            signup_reply: RefCell::new(MockReply::ok("{}")),
            catalog_fetches: Cell::new(0),
            signups: RefCell::new(Vec::new()),
        }
    }

    /// Serve `catalog` from `GET /activities`
    pub fn with_catalog(catalog: &ActivityCatalog) -> Self {
        let api = Self::new();
        api.set_catalog(catalog);
        api
    }

    pub fn set_catalog(&self, catalog: &ActivityCatalog) {
        let body = serde_json::to_string(catalog).unwrap_or_else(|_| "{}".into());
        self.set_catalog_reply(MockReply::ok(body));
    }

    pub fn set_catalog_reply(&self, reply: MockReply) {
        *self.catalog_reply.borrow_mut() = reply;
    }

    pub fn set_signup_reply(&self, reply: MockReply) {
        *self.signup_reply.borrow_mut() = reply;
    }

    /// Number of `GET /activities` calls so far
    pub fn catalog_fetches(&self) -> usize {
        self.catalog_fetches.get()
    }

    /// Signup requests received so far
    pub fn signups(&self) -> Vec<SignupRequest> {
        self.signups.borrow().clone()
    }

    /// Total requests of any kind
    pub fn request_count(&self) -> usize {
        self.catalog_fetches() + self.signups.borrow().len()
    }
}

#[async_trait(?Send)]
impl ActivityApi for MockActivityApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog> {
        self.catalog_fetches.set(self.catalog_fetches.get() + 1);
        let reply = self.catalog_reply.borrow().clone();
        match reply {
            MockReply::Respond { status, body } => interpret_catalog(status, &body),
            MockReply::NetworkError(message) => Err(BoardError::Network(message)),
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse> {
        self.signups.borrow_mut().push(request.clone());
        let reply = self.signup_reply.borrow().clone();
        match reply {
            MockReply::Respond { status, body } => interpret_signup(status, &body),
            MockReply::NetworkError(message) => Err(BoardError::Network(message)),
        }
    }
}
