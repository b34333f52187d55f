//! HTTP plumbing shared by every RecruitIA service: URL construction from the
//! configured origin, standard headers, and response decoding.

pub mod candidate;
pub mod company;
pub mod jobs;

use std::time::Duration;

use log::{debug, trace};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Request, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::utils::config::ApiConfig;

pub use candidate::{CandidateApi, CandidateService};
pub use company::{CompanyApi, CompanyService};
pub use jobs::{JobsApi, JobsService};

pub const FALLBACK_ERROR_MESSAGE: &str = "Error en la petición";

/// A non-2xx answer from the API, normalized to `{status, message, data}`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// The error body as sent by the server, or `{}` when it was not JSON.
    pub data: Value,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: Value::Object(Map::new()),
        }
    }

    /// Prefers `detail`, then `message`, then a generic fallback.
    pub fn from_payload(status: u16, data: Value) -> Self {
        let message = ["detail", "message"]
            .iter()
            .find_map(|key| data.get(key).and_then(describe))
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        Self {
            data,
            ..Self::new(status, message)
        }
    }
}

/// Readable text for an error field. Validation errors arrive as a list of
/// `{loc, msg}` objects, which are joined by their `msg`.
fn describe(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not reach the RecruitIA API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    Request(String),
}

impl ClientError {
    /// The message to show the user, when the server supplied one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ClientError::Api(error) => Some(&error.message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(error) => Some(error.status),
            _ => None,
        }
    }
}

/// Turns a status and raw body into `T`, or into a normalized error.
///
/// A 2xx with an unparseable body is a [`ClientError::Decode`], never an
/// [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, ClientError> {
    if !status.is_success() {
        let data = serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()));
        let error = ApiError::from_payload(status.as_u16(), data);
        debug!("api responded with {}: {}", status, error.message);
        return Err(error.into());
    }

    Ok(serde_json::from_slice(body)?)
}

/// Connection settings shared by the service modules. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    user_agent: HeaderValue,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ClientError::Request(format!("bad API origin {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Request(format!(
                "bad API origin {}",
                config.base_url
            )));
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ClientError::Request(format!("bad user agent: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            user_agent,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Expands a path template such as `/api/vacantes/:vacanteId/detalles`.
    ///
    /// Each `:name` segment is replaced by the matching parameter, encoded as
    /// a single path segment.
    pub fn endpoint(&self, template: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut segments = Vec::new();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| {
                            ClientError::Request(format!("missing path parameter {name}"))
                        })?;
                    segments.push(value);
                }
                None => segments.push(segment),
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Request(format!("bad API origin {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `Content-Type: application/json` plus the client's user agent.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers
    }

    pub fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url).headers(self.headers())
    }

    pub fn post_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> RequestBuilder {
        self.http.post(url).headers(self.headers()).json(body)
    }

    /// Multipart bodies carry their own boundary, so no content type is set here.
    pub fn post_multipart(&self, url: Url, form: reqwest::multipart::Form) -> RequestBuilder {
        self.http
            .post(url)
            .header(USER_AGENT, self.user_agent.clone())
            .multipart(form)
    }

    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ClientError> {
        trace!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    pub(crate) fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            user_agent: "recruitia-test".to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    pub(crate) fn json_body(request: &Request) -> Value {
        let bytes = request
            .body()
            .and_then(|body| body.as_bytes())
            .expect("request has a buffered body");
        serde_json::from_slice(bytes).unwrap()
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Created {
        empresa_id: String,
        mensaje: String,
    }

    #[test]
    fn detail_becomes_the_message() {
        let body = json!({"detail": "X"}).to_string();
        let error = decode_response::<Value>(StatusCode::NOT_FOUND, body.as_bytes()).unwrap_err();

        match error {
            ClientError::Api(error) => {
                assert_eq!(error.status, 404);
                assert_eq!(error.message, "X");
                assert_eq!(error.data, json!({"detail": "X"}));
            }
            other => panic!("expected an api error, got {other:?}"),
        }
    }

    #[test]
    fn message_is_used_when_detail_is_absent() {
        let body = json!({"message": "empresa duplicada"}).to_string();
        let error =
            decode_response::<Value>(StatusCode::CONFLICT, body.as_bytes()).unwrap_err();
        assert_eq!(error.user_message(), Some("empresa duplicada"));
        assert_eq!(error.status(), Some(409));
    }

    #[test]
    fn unparseable_error_body_falls_back() {
        let error = decode_response::<Value>(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>")
            .unwrap_err();

        match error {
            ClientError::Api(error) => {
                assert_eq!(error.status, 502);
                assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
                assert_eq!(error.data, json!({}));
            }
            other => panic!("expected an api error, got {other:?}"),
        }
    }

    #[test]
    fn validation_detail_lists_are_joined() {
        let body = json!({"detail": [
            {"loc": ["body", "email"], "msg": "field required"},
            {"loc": ["body", "ciudad"], "msg": "field required"}
        ]})
        .to_string();
        let error = decode_response::<Value>(StatusCode::UNPROCESSABLE_ENTITY, body.as_bytes())
            .unwrap_err();
        assert_eq!(error.user_message(), Some("field required; field required"));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let error = decode_response::<Created>(StatusCode::OK, b"{not json").unwrap_err();
        assert!(matches!(error, ClientError::Decode(_)));
        assert_eq!(error.user_message(), None);
    }

    #[test]
    fn decoding_is_repeatable() {
        let body = json!({"empresa_id": "e-1", "mensaje": "ok"}).to_string();
        let first: Created = decode_response(StatusCode::CREATED, body.as_bytes()).unwrap();
        let second: Created = decode_response(StatusCode::CREATED, body.as_bytes()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.empresa_id, "e-1");
    }

    #[test]
    fn endpoint_substitutes_and_encodes_parameters() {
        let api = client("http://localhost:8000");
        let url = api
            .endpoint("/api/vacantes/:vacanteId/detalles", &[("vacanteId", "a b/c")])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/vacantes/a%20b%2Fc/detalles");
    }

    #[test]
    fn endpoint_keeps_an_origin_prefix() {
        let api = client("https://example.com/backend/");
        let url = api.endpoint("/api/candidato/aplicar", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/backend/api/candidato/aplicar");
    }

    #[test]
    fn endpoint_requires_every_parameter() {
        let api = client("http://localhost:8000");
        let error = api
            .endpoint("/api/empresa/:empresaId/aplicaciones", &[])
            .unwrap_err();
        assert!(matches!(error, ClientError::Request(_)));
    }

    #[test]
    fn rejects_a_bad_origin() {
        let result = ApiClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            user_agent: "recruitia-test".to_string(),
            timeout_secs: Some(5),
        });
        assert!(matches!(result, Err(ClientError::Request(_))));
    }

    #[test]
    fn json_requests_carry_standard_headers() {
        let api = client("http://localhost:8000");
        let url = api.endpoint("/api/empresa/registrar", &[]).unwrap();
        let request = api.post_json(url, &json!({"a": 1})).build().unwrap();

        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[USER_AGENT], "recruitia-test");
        assert_eq!(json_body(&request), json!({"a": 1}));
    }
}
