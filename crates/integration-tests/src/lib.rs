//! Integration tests for Sweet Joy.
//!
//! The tests drive the full storefront router in-process, middleware and
//! session layer included, so no running server is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sweet-joy-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use sweet_joy_core::Catalog;
use sweet_joy_storefront::{
    config::{ConfigError, StorefrontConfig},
    middleware::SESSION_COOKIE_NAME,
    state::AppState,
};
use tower::ServiceExt;

/// Largest body the helpers will buffer.
const BODY_LIMIT: usize = 1024 * 1024;

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// A response header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// One browser visiting an in-process storefront.
///
/// Keeps the session cookie between requests the way a browser would.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Build a storefront with default configuration and the seeded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the default configuration fails to load.
    pub fn new() -> Result<Self, ConfigError> {
        let config = StorefrontConfig::from_lookup(|key| match key {
            "STOREFRONT_STATIC_DIR" => {
                Some(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static").to_string())
            }
            _ => None,
        })?;

        Ok(Self {
            router: sweet_joy_storefront::app(AppState::new(config, Catalog::seeded())),
            cookie: None,
        })
    }

    /// A second visitor on the same server, with no session yet.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, uri: &str) -> Result<TestResponse, axum::Error> {
        let request = self.request("GET", uri).body(Body::empty()).map_err(axum::Error::new)?;
        self.send(request).await
    }

    /// Send a GET request with extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body cannot be read.
    pub async fn get_with_headers(
        &mut self,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> Result<TestResponse, axum::Error> {
        let mut builder = self.request("GET", uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).map_err(axum::Error::new)?;
        self.send(request).await
    }

    /// Send a url-encoded form POST.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body cannot be read.
    pub async fn post_form(
        &mut self,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> Result<TestResponse, axum::Error> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .map_err(axum::Error::new)?;
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Result<TestResponse, axum::Error> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(axum::Error::new)?;

        let status = response.status();
        let headers = response.headers().clone();
        self.remember_cookie(&headers);

        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await?;
        Ok(TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    fn remember_cookie(&mut self, headers: &HeaderMap) {
        let prefix = format!("{SESSION_COOKIE_NAME}=");
        let cookie = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with(&prefix));

        if let Some(pair) = cookie {
            self.cookie = Some(pair.to_string());
        }
    }
}
