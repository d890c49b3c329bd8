//! GitHub listing over the browser `fetch` API.

use async_trait::async_trait;
use folio_core::{FetchError, RepoQuery, RepoSource, Repository, parse_repositories};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Unauthenticated client for the public REST API. One request per call,
/// no retries.
#[derive(Debug, Clone)]
pub struct GithubClient {
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

fn network_error(value: JsValue) -> FetchError {
    FetchError::Network(format!("{value:?}"))
}

async fn get_text(url: &str) -> Result<String, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window object".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/vnd.github+json")
        .map_err(network_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    body.as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))
}

#[async_trait(?Send)]
impl RepoSource for GithubClient {
    async fn list_repositories(&self, query: &RepoQuery) -> Result<Vec<Repository>, FetchError> {
        let url = query.url(&self.api_base);
        tracing::debug!(%url, "Requesting repository listing");
        let body = get_text(&url).await?;
        parse_repositories(&body)
    }
}
