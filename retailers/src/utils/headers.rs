/// Chrome on macOS, the browser the header bundles were captured from
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

const BROWSER_HEADERS: [(&str, &str); 9] = [
    ("accept", "application/json, text/plain, */*"),
    ("accept-language", "en-GB,en-US;q=0.9,en;q=0.8"),
    (
        "sec-ch-ua",
        "\"Not/A)Brand\";v=\"99\", \"Google Chrome\";v=\"115\", \"Chromium\";v=\"115\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
    ("user-agent", USER_AGENT),
];

/// The headers every retailer gets, followed by `extra`
pub(crate) fn browser_headers(extra: &[(&str, &str)]) -> Vec<(String, String)> {
    BROWSER_HEADERS
        .iter()
        .chain(extra.iter())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
