//! HTTP Activity API
//!
//! `reqwest` client for the activities server. Works on native targets and in
//! WASM, where reqwest delegates to the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{ActivityApi, interpret_catalog, interpret_signup};
use crate::error::{BoardError, Result};
use crate::model::{ActivityCatalog, SignupRequest, SignupResponse};

/// Activities server reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpActivityApi {
    client: Client,
    base_url: Url,
}

impl HttpActivityApi {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8000`)
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BoardError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BoardError::Config(format!("{base_url} cannot be a base URL")));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// URL of the catalog endpoint
    pub fn activities_url(&self) -> Url {
        self.endpoint(&["activities"])
    }

    /// URL of the signup endpoint; the name is percent-encoded as a path
    /// segment and the email as a query value
    pub fn signup_url(&self, request: &SignupRequest) -> Url {
        let mut url = self.endpoint(&["activities", request.activity.as_str(), "signup"]);
        url.query_pairs_mut().append_pair("email", &request.email);
        url
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog> {
        let response = self.client.get(self.activities_url()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_catalog(status, &body)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse> {
        let response = self.client.post(self.signup_url(request)).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        interpret_signup(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_url() {
        let api = HttpActivityApi::new("http://localhost:8000").unwrap();
        assert_eq!(api.activities_url().as_str(), "http://localhost:8000/activities");

        let api = HttpActivityApi::new("http://localhost:8000/school/").unwrap();
        assert_eq!(api.activities_url().as_str(), "http://localhost:8000/school/activities");
    }

    #[test]
    fn test_signup_url_is_encoded() {
        let api = HttpActivityApi::new("http://localhost:8000").unwrap();
        let request = SignupRequest::new("Chess Club/B", "emma@mergington.edu").unwrap();
        assert_eq!(
            api.signup_url(&request).as_str(),
            "http://localhost:8000/activities/Chess%20Club%2FB/signup?email=emma%40mergington.edu"
        );
    }

    #[test]
    fn test_rejects_relative_base() {
        assert!(matches!(HttpActivityApi::new("/activities"), Err(BoardError::Config(_))));
    }
}
