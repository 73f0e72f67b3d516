use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::FormData;

use super::config::ApiConfig;
use super::transport::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, RequestBody};
use crate::constants::FALLBACK_ERROR_MESSAGE;
use crate::error::ApiError;

/// JSON-over-HTTP client used by every page script.
///
/// Both verbs decode the body as JSON before looking at the status, so a
/// non-JSON error page surfaces as [`ApiError::Decode`]. A non-2xx status
/// becomes [`ApiError::Status`] carrying the server's `error` field.
#[derive(Debug, Clone)]
pub struct ApiClient<T = FetchTransport> {
    transport: T,
    config: ApiConfig,
}

impl ApiClient<FetchTransport> {
    /// Client for the current page configuration.
    pub fn browser() -> Self {
        Self::new(FetchTransport, ApiConfig::current())
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.dispatch(HttpRequest::get(self.config.url(url))).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value, ApiError> {
        let encoded = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.dispatch(HttpRequest::post(self.config.url(url), RequestBody::Json(encoded)))
            .await
    }

    pub async fn post_form(&self, url: &str, form: FormData) -> Result<Value, ApiError> {
        self.dispatch(HttpRequest::post(self.config.url(url), RequestBody::Form(form)))
            .await
    }

    /// GET and decode into a typed payload.
    pub async fn get_as<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let data = self.get(url).await?;
        serde_json::from_value(data).map_err(ApiError::Decode)
    }

    /// POST JSON and decode into a typed payload.
    pub async fn post_as<B, R>(&self, url: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let data = self.post_json(url, body).await?;
        serde_json::from_value(data).map_err(ApiError::Decode)
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let method = request.method;
        let url = request.url.clone();

        let result = match self.transport.send(request).await {
            Ok(resp) => decode_response(resp),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::error!(method = method.as_str(), %url, error = %e, "API Error");
        }
        result
    }
}

/// Parse the body, then map a failed status onto the server-provided
/// message.
pub fn decode_response(resp: HttpResponse) -> Result<Value, ApiError> {
    let data: Value = serde_json::from_str(&resp.body).map_err(ApiError::Decode)?;

    if !resp.ok() {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_string();
        return Err(ApiError::Status { status: resp.status, message });
    }

    Ok(data)
}
