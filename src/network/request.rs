//! # Request Builder
//!
//! Turns caller intent (URL, method, headers, query, body) into a canonical
//! [`NetworkRequest`]. Pure data: no I/O and no failure mode. A base URL that
//! doesn't parse is the caller's problem and is reported as
//! `NetworkError::InvalidUrl` before a request is ever built.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Url;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP methods the request layer knows how to send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to perform one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRequest {
    pub base_url: Url,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub query_parameters: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl NetworkRequest {
    /// A GET request with no extra headers, no query and no body.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            method: HttpMethod::default(),
            headers: with_default_content_type(BTreeMap::new()),
            query_parameters: BTreeMap::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Replaces the header map. A `Content-Type` of `application/json` is
    /// added unless the given map already names one.
    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = with_default_content_type(headers);
        self
    }

    pub fn query_parameters(mut self, query: BTreeMap<String, String>) -> Self {
        self.query_parameters = query;
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The URL to send to: the base URL with query parameters appended.
    pub fn url(&self) -> Url {
        let mut url = self.base_url.clone();
        if !self.query_parameters.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query_parameters.iter());
        }
        url
    }
}

/// Header names are case-insensitive on the wire, so `content-type` counts
/// as an explicit value too.
fn with_default_content_type(mut headers: BTreeMap<String, String>) -> BTreeMap<String, String> {
    let has_content_type = headers
        .keys()
        .any(|key| key.eq_ignore_ascii_case(CONTENT_TYPE));
    if !has_content_type {
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/MockSports/sports.json").unwrap()
    }

    #[test]
    fn test_default_headers_are_exactly_json_content_type() {
        let request = NetworkRequest::new(base());
        let expected: BTreeMap<String, String> =
            [(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())].into();
        assert_eq!(request.headers, expected);
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_explicit_content_type_is_preserved() {
        let headers: BTreeMap<String, String> =
            [(CONTENT_TYPE.to_string(), "text/plain".to_string())].into();
        let request = NetworkRequest::new(base()).headers(headers.clone());
        assert_eq!(request.headers, headers);
    }

    #[test]
    fn test_lowercase_content_type_counts_as_explicit() {
        let headers: BTreeMap<String, String> =
            [("content-type".to_string(), "text/html".to_string())].into();
        let request = NetworkRequest::new(base()).headers(headers);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers["content-type"], "text/html");
    }

    #[test]
    fn test_other_headers_get_content_type_added() {
        let headers: BTreeMap<String, String> =
            [("Accept".to_string(), "*/*".to_string())].into();
        let request = NetworkRequest::new(base()).headers(headers);
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers[CONTENT_TYPE], APPLICATION_JSON);
    }

    #[test]
    fn test_url_appends_query_parameters() {
        let query: BTreeMap<String, String> = [
            ("lang".to_string(), "en".to_string()),
            ("sport".to_string(), "BASK".to_string()),
        ]
        .into();
        let request = NetworkRequest::new(base()).query_parameters(query);
        assert_eq!(
            request.url().as_str(),
            "https://example.com/MockSports/sports.json?lang=en&sport=BASK"
        );
        assert_eq!(NetworkRequest::new(base()).url(), base());
    }

    #[test]
    fn test_builder_sets_method_and_body() {
        let request = NetworkRequest::new(base())
            .method(HttpMethod::Post)
            .body(b"{}".to_vec());
        assert_eq!(request.method.to_string(), "POST");
        assert_eq!(request.body.as_deref(), Some(&b"{}"[..]));
    }
}
