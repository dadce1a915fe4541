use std::{str::FromStr, sync::Arc, time::Duration};

use reqwest::{
    Client, ClientBuilder, Url,
    cookie::{CookieStore, Jar},
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::{debug, info};

use crate::{
    errors::CrawlerError,
    request::Request,
    traits::{CrawlerResponse, HttpMethod},
};

const PAGE_TIMEOUT_SECONDS: u64 = 30;

/// One HTTP client bound to its own cookie jar.
///
/// Every request sent through a session carries the cookies set by earlier
/// responses of the same session, and nothing from any other session.
pub struct Session {
    client: Client,
    jar: Arc<Jar>,
}

impl Session {
    pub fn new() -> Result<Self, CrawlerError> {
        let jar = Arc::new(Jar::default());

        let client = ClientBuilder::new()
            .gzip(true)
            .http1_ignore_invalid_headers_in_responses(true)
            .timeout(Duration::from_secs(PAGE_TIMEOUT_SECONDS))
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self { client, jar })
    }

    /// The `Cookie` header this session would send to `url`, if any
    pub fn cookie_header(&self, url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        let value = self.jar.cookies(&url)?;

        value.to_str().ok().map(str::to_string)
    }

    pub async fn make_web_request(
        &self,
        request: Request,
    ) -> Result<CrawlerResponse, CrawlerError> {
        let mut request_builder = match request.method {
            HttpMethod::GET => self.client.get(request.url.clone()),
            HttpMethod::POST => self.client.post(request.url.clone()),
            HttpMethod::PUT => self.client.put(request.url.clone()),
        };

        if let Some(json) = request.json {
            request_builder = request_builder.json(&json);
        }

        if let Some(headers) = request.headers {
            let mut header_map = HeaderMap::new();

            for (key, value) in headers.iter() {
                header_map.append(HeaderName::from_str(key)?, HeaderValue::from_str(value)?);
            }

            request_builder = request_builder.headers(header_map);
        }

        info!("Sending {:?} request to {}", request.method, request.url);

        let response = request_builder.send().await?;

        debug!("{response:?}");

        let status = response.status();
        let body = response.text().await?;

        Ok(CrawlerResponse { status, body })
    }
}
