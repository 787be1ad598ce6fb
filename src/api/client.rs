use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::auth::AuthContext;
use crate::config::{Config, ConfigError};
use crate::error::{Error, Result};

/// HTTP adapter for the roster REST API.
///
/// Attaches the bearer header from its [`AuthContext`] on every request and
/// turns non-2xx responses into [`Error`]. No retries, no explicit timeout,
/// no de-duplication of identical in-flight requests.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    auth: AuthContext,
}

impl ApiClient {
    /// `base_url` must end with `/` for relative paths to nest beneath it.
    pub fn new(base_url: Url, auth: AuthContext) -> Self {
        Self {
            http: Client::new(),
            base_url,
            auth,
        }
    }

    pub fn from_config(config: &Config, auth: AuthContext) -> Result<Self> {
        Ok(Self::new(config.base_url()?, auth))
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Issue one request and check its status.
    ///
    /// `fallback` is the user-facing message used when the server does not
    /// supply one (or when no response arrives at all).
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        fallback: &str,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        self.send(method, url, body, fallback).await
    }

    async fn send<B>(&self, method: Method, url: Url, body: Option<&B>, fallback: &str) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, path = url.path(), query = url.query().unwrap_or(""), "Sending request");

        let mut builder = self.http.request(method.clone(), url);
        if let Some((name, value)) = self.auth.header() {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| {
            tracing::debug!(%method, error = %source, "Request failed before response");
            Error::Network {
                message: fallback.to_string(),
                source,
            }
        })?;

        Self::ensure_success(response, fallback).await
    }

    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)], fallback: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::GET, path, query, None::<&()>, fallback)
            .await?;
        Self::decode(response, fallback).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path, &[], Some(body), fallback)
            .await?;
        Self::decode(response, fallback).await
    }

    /// DELETE whose response body, if any, is ignored.
    pub async fn delete(&self, path: &str, fallback: &str) -> Result<()> {
        self.request(Method::DELETE, path, &[], None::<&()>, fallback)
            .await?;
        Ok(())
    }

    /// DELETE `path/{id}` with `id` kept as a single percent-encoded
    /// segment, so `/`, `?` and `..` inside it never change the target.
    pub async fn delete_item(&self, path: &str, id: &str, fallback: &str) -> Result<()> {
        let mut url = self.url(path, &[])?;
        url.path_segments_mut()
            .map_err(|()| ConfigError::ValidationError {
                message: format!("Base URL '{}' cannot carry path segments", self.base_url),
            })?
            .pop_if_empty()
            .push(id);
        self.send(Method::DELETE, url, None::<&()>, fallback).await?;
        Ok(())
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Cannot join '{}' onto '{}': {}", path, self.base_url, e),
            })?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
        response.json::<T>().await.map_err(|source| Error::Decode {
            message: fallback.to_string(),
            source,
        })
    }

    /// Returns the response on 2xx, or an error carrying the server's
    /// `message` field (falling back to `fallback`).
    async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body).unwrap_or_else(|| fallback.to_string());
        tracing::debug!(status = status.as_u16(), %message, "Request rejected");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            Err(Error::Auth { message })
        } else {
            Err(Error::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Non-empty `message` string of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_message_field() {
        assert_eq!(
            server_message(r#"{"message":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn server_message_ignores_other_shapes() {
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("<html>oops</html>"), None);
        assert_eq!(server_message(r#"{"error":"x"}"#), None);
        assert_eq!(server_message(r#"{"message":"  "}"#), None);
        assert_eq!(server_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn item_id_stays_one_segment() {
        let mut url = Url::parse("http://localhost:5000/api/student/delete-student").unwrap();
        url.path_segments_mut().unwrap().push("../../auth/login?x=1");
        assert_eq!(url.path(), "/api/student/delete-student/..%2F..%2Fauth%2Flogin%3Fx=1");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn url_joins_path_and_query() {
        let client = ApiClient::new(
            Url::parse("http://localhost:5000/").unwrap(),
            AuthContext::new(),
        );
        let url = client
            .url(
                "api/student/get-students-by-teacher",
                &[("offset", "2".to_string()), ("limit", "10".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/student/get-students-by-teacher?offset=2&limit=10"
        );
    }
}
