//! API Client

use activity_core::{HttpActivityApi, Result};

/// Client for the server that served this page
pub fn same_origin_api() -> Result<HttpActivityApi> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".into());

    HttpActivityApi::new(&origin)
}
