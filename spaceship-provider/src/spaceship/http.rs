//! Spaceship HTTP request methods

use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::error::Result;
use crate::http_client::{HttpUtils, UpstreamResponse};
use crate::types::ListDomainsParams;

use super::{API_KEY_HEADER, API_SECRET_HEADER, SpaceshipClient};

/// `/domains/{domain}` with the name percent-encoded.
pub(crate) fn domain_path(domain: &str) -> String {
    format!("/domains/{}", urlencoding::encode(domain))
}

impl SpaceshipClient {
    /// Authenticated request builder for `path` under the API root.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.credentials.base_url);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header(API_SECRET_HEADER, &self.credentials.api_secret)
    }

    /// `GET /domains` with pagination forwarded verbatim.
    pub(crate) fn list_domains_request(&self, params: &ListDomainsParams) -> RequestBuilder {
        self.request(Method::GET, "/domains")
            .query(&[("take", params.take), ("skip", params.skip)])
    }

    /// Execute a GET request
    pub(crate) async fn get(&self, path: &str) -> Result<UpstreamResponse> {
        HttpUtils::execute(self.request(Method::GET, path), "GET", path).await
    }

    /// Execute a request carrying a JSON body
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<UpstreamResponse> {
        let method_name = method.as_str().to_string();
        HttpUtils::execute(self.request(method, path).json(body), &method_name, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaceship::SpaceshipCredentials;

    fn client() -> SpaceshipClient {
        SpaceshipClient::new(
            SpaceshipCredentials::new("test-key", "test-secret")
                .with_base_url("https://api.test/v1"),
        )
        .unwrap()
    }

    #[test]
    fn list_domains_forwards_pagination() {
        let request = client()
            .list_domains_request(&ListDomainsParams { take: 25, skip: 50 })
            .build()
            .unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.test/v1/domains?take=25&skip=50"
        );
    }

    #[test]
    fn list_domains_default_pagination() {
        let request = client()
            .list_domains_request(&ListDomainsParams::new(None, None))
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("take=10&skip=0"));
    }

    #[test]
    fn requests_carry_credential_headers() {
        let request = client()
            .request(Method::GET, "/contacts/c1")
            .build()
            .unwrap();
        assert_eq!(request.headers()[API_KEY_HEADER], "test-key");
        assert_eq!(request.headers()[API_SECRET_HEADER], "test-secret");
        assert_eq!(request.url().path(), "/v1/contacts/c1");
    }

    #[test]
    fn domain_path_encodes_name() {
        assert_eq!(domain_path("example.com"), "/domains/example.com");
        assert_eq!(domain_path("a b/c"), "/domains/a%20b%2Fc");
    }
}
