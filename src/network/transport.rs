//! Transport seam between the API client and `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use crate::error::{js_error_message, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Request payload. JSON bodies carry a `Content-Type` header; multipart
/// bodies leave it to the browser so the boundary is filled in.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(String),
    Form(FormData),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None }
    }

    pub fn post(url: impl Into<String>, body: RequestBody) -> Self {
        Self { method: Method::Post, url: url.into(), body: Some(body) }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self.body {
            Some(RequestBody::Json(_)) => Some("application/json"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Mirrors `Response.ok`.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can turn an [`HttpRequest`] into an [`HttpResponse`].
/// Non-2xx statuses are *not* errors at this level.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `window.fetch` backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    async fn fetch(request: &HttpRequest) -> Result<HttpResponse, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());

        let headers = Headers::new()?;
        if let Some(content_type) = request.content_type() {
            headers.append("Content-Type", content_type)?;
        }
        opts.set_headers(&headers);

        match &request.body {
            Some(RequestBody::Json(text)) => opts.set_body(&JsValue::from_str(text)),
            Some(RequestBody::Form(form)) => opts.set_body(form.as_ref()),
            None => {}
        }

        let req = Request::new_with_str_and_init(&request.url, &opts)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let status = resp.status();
        let text = JsFuture::from(resp.text()?).await?;
        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Self::fetch(&request)
            .await
            .map_err(|e| ApiError::Transport(js_error_message(&e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_json_bodies_set_content_type() {
        let get = HttpRequest::get("/api/writer/my_tasks");
        assert_eq!(get.content_type(), None);

        let post = HttpRequest::post("/api/x", RequestBody::Json("{}".into()));
        assert_eq!(post.content_type(), Some("application/json"));
    }

    #[test]
    fn ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, "").ok());
        assert!(HttpResponse::new(204, "").ok());
        assert!(!HttpResponse::new(304, "").ok());
        assert!(!HttpResponse::new(404, "").ok());
    }
}
