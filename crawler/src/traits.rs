use reqwest::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
}

#[derive(Debug)]
pub struct CrawlerResponse {
    pub status: StatusCode,
    pub body: String,
}

impl CrawlerResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
