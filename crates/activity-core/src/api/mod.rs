//! Activity API Transport
//!
//! The board talks to the activities server through [`ActivityApi`]. The HTTP
//! implementation runs both natively and in the browser; the mock backs the
//! unit tests.

mod http;
mod mock;

pub use http::HttpActivityApi;
pub use mock::{MockActivityApi, MockReply};

use async_trait::async_trait;

use crate::error::{BoardError, LOAD_FAILED, Result};
use crate::model::{ActivityCatalog, SignupRequest, SignupResponse};

/// Transport for the two endpoints the board consumes (Strategy pattern)
///
/// Futures are not `Send`: browser fetches live on the single UI thread.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn fetch_catalog(&self) -> Result<ActivityCatalog>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse>;
}

/// Turn a raw `GET /activities` response into a catalog
pub(crate) fn interpret_catalog(status: u16, body: &str) -> Result<ActivityCatalog> {
    if !(200..300).contains(&status) {
        return Err(BoardError::Server {
            status,
            message: LOAD_FAILED.into(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

/// Turn a raw signup response into its parsed body or a server error
pub(crate) fn interpret_signup(status: u16, body: &str) -> Result<SignupResponse> {
    if (200..300).contains(&status) {
        Ok(SignupResponse::from_body(body))
    } else {
        Err(BoardError::signup_rejected(status, body))
    }
}
