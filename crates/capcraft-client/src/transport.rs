//! HTTP seam between the typed client and the network.
//!
//! The transport only moves bytes: it reports non-2xx statuses as ordinary
//! responses and leaves interpretation (error extraction, token clearing)
//! to the client. The production implementation rides reqwest, which is
//! fetch-backed on wasm, so the same client code runs in the browser and in
//! native tests.

use std::future::Future;
use std::rc::Rc;

use crate::error::ApiError;
use crate::types::MediaUpload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One outbound request, fully described.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(url: String, bearer: Option<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            bearer,
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(url: String, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            bearer: None,
            body: RequestBody::Json(body),
        }
    }
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Multipart caption upload: the media part plus plain form fields.
    CaptionUpload {
        media: MediaUpload,
        fields: Vec<(&'static str, String)>,
    },
}

/// Raw status + body; the client decides what it means.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests.
///
/// Note: no `Send` bounds on the returned futures because wasm is
/// single-threaded and fetch futures aren't `Send`.
pub trait ApiTransport {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

impl<T: ApiTransport> ApiTransport for Rc<T> {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> {
        (**self).execute(request)
    }
}

/// reqwest-backed transport (browser fetch on wasm).
///
/// No explicit timeouts and no retries; a failed request surfaces
/// immediately as [`ApiError::Network`].
#[derive(Clone, Debug, Default)]
pub struct FetchTransport {
    http: reqwest::Client,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiTransport for FetchTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::CaptionUpload { media, fields } => {
                let part = reqwest::multipart::Part::bytes(media.bytes)
                    .file_name(media.file_name)
                    .mime_str(&media.content_type)
                    .map_err(|e| ApiError::Network(format!("invalid upload content type: {e}")))?;
                let mut form = reqwest::multipart::Form::new().part("file", part);
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                builder.multipart(form)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
