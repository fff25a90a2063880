use crate::fetchers::{FetchError, PageFetcher};
use crate::query::SearchParameters;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

/// Fetches listing fragments from the search endpoint with plain GET requests.
///
/// No timeout and no retry: a failure is handed straight back to the caller.
pub struct HttpFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpFetcher {
    /// Create a fetcher for `endpoint` that always sends `user_agent`
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint).map_err(FetchError::InvalidEndpoint)?;

        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(user_agent).map_err(FetchError::InvalidUserAgent)?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, endpoint })
    }

    /// Full request URL for one page
    pub fn request_url(&self, params: &SearchParameters, offset: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params.query_pairs(offset));
        url
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, params: &SearchParameters, offset: usize) -> Result<String, FetchError> {
        let url = self.request_url(params, offset);
        ::log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        ::log::trace!("Fetched {} bytes for offset {}", body.len(), offset);
        Ok(body)
    }
}
