//! Typed client for the auth service and generation backend.
//!
//! One explicitly constructed object owns the bearer token; endpoints are
//! re-resolved on every call so a changing browser origin (preview domains,
//! sandbox forwards) is always honored.

use std::cell::RefCell;

use serde::de::DeserializeOwned;

use crate::endpoint::{EndpointResolver, ExecutionContext, OriginProvider, Service};
use crate::error::ApiError;
use crate::token::TokenStore;
use crate::transport::{ApiRequest, ApiTransport, HttpMethod, RawResponse, RequestBody};
use crate::types::{
    AuthHealth, AuthSession, BackendHealth, CaptionAllowance, CaptionOptions, GeneratedCaptions,
    MediaUpload, Subscription, TokenValidation, User,
};

/// API client generic over its transport, token store, and origin source.
///
/// The token is read from the store once at construction; the in-memory
/// copy is authoritative for the rest of the session.
pub struct CaptionApi<T, S, O> {
    transport: T,
    tokens: S,
    origin: O,
    resolver: EndpointResolver,
    token: RefCell<Option<String>>,
}

/// The client as assembled in the browser.
pub type BrowserApi = CaptionApi<
    crate::transport::FetchTransport,
    crate::token::LocalStorageTokens,
    crate::endpoint::BrowserOrigin,
>;

impl BrowserApi {
    /// Browser client: fetch transport, localStorage token, window origin.
    pub fn browser(resolver: EndpointResolver) -> Self {
        Self::new(
            resolver,
            crate::transport::FetchTransport::new(),
            crate::token::LocalStorageTokens,
            crate::endpoint::BrowserOrigin,
        )
    }
}

impl<T, S, O> CaptionApi<T, S, O>
where
    T: ApiTransport,
    S: TokenStore,
    O: OriginProvider,
{
    pub fn new(resolver: EndpointResolver, transport: T, tokens: S, origin: O) -> Self {
        let token = RefCell::new(tokens.load());
        Self {
            transport,
            tokens,
            origin,
            resolver,
            token,
        }
    }

    /// The bearer token currently held in memory.
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    // ============ Auth service ============

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthSession, ApiError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "full_name": full_name,
        });
        let request = ApiRequest::post_json(self.service_url(Service::Auth, "/signup"), body);
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(fail(&response, "Signup failed"));
        }
        let session: AuthSession = decode(&response.body)?;
        self.store_token(&session.access_token);
        Ok(session)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = ApiRequest::post_json(self.service_url(Service::Auth, "/login"), body);
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(fail(&response, "Login failed"));
        }
        let session: AuthSession = decode(&response.body)?;
        self.store_token(&session.access_token);
        Ok(session)
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.authed_get(Service::Auth, "/me", "Failed to fetch user")
            .await
    }

    pub async fn subscription(&self) -> Result<Subscription, ApiError> {
        self.authed_get(Service::Auth, "/subscription", "Failed to fetch subscription")
            .await
    }

    pub async fn check_caption_limit(&self) -> Result<CaptionAllowance, ApiError> {
        self.authed_get(
            Service::Auth,
            "/caption/check-limit",
            "Failed to check caption limit",
        )
        .await
    }

    /// Validate the stored token with the auth service.
    ///
    /// Never fails: with no stored token it reports invalid without a
    /// request, and any transport or server failure clears the token and
    /// reports invalid.
    pub async fn validate_token(&self) -> TokenValidation {
        let Some(token) = self.token() else {
            return TokenValidation::invalid();
        };

        let body = serde_json::json!({ "token": token });
        let request =
            ApiRequest::post_json(self.service_url(Service::Auth, "/validate-token"), body);

        match self.transport.execute(request).await {
            Ok(response) if response.is_success() => match decode(&response.body) {
                Ok(validation) => validation,
                Err(_) => {
                    self.clear_token();
                    TokenValidation::invalid()
                }
            },
            Ok(_) | Err(_) => {
                self.clear_token();
                TokenValidation::invalid()
            }
        }
    }

    /// Drop the session locally. No network call is involved.
    pub fn logout(&self) {
        self.clear_token();
    }

    // ============ Generation backend ============

    /// Generate captions for an uploaded file.
    ///
    /// Checks the caption quota first and fails fast when it is exhausted,
    /// so large media is never uploaded just to be rejected.
    pub async fn generate_captions(
        &self,
        media: MediaUpload,
        options: &CaptionOptions,
    ) -> Result<GeneratedCaptions, ApiError> {
        let allowance = self.check_caption_limit().await?;
        if !allowance.has_remaining {
            return Err(ApiError::QuotaExceeded);
        }

        let fields = vec![
            ("fileType", options.kind.as_str().to_owned()),
            ("tone", options.tone.as_str().to_owned()),
            ("length", options.length.as_str().to_owned()),
            ("hashtagCount", options.hashtag_count.to_string()),
        ];
        let request = ApiRequest {
            method: HttpMethod::Post,
            url: self.service_url(Service::Backend, "/generate-captions"),
            bearer: self.token(),
            body: RequestBody::CaptionUpload { media, fields },
        };

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(self.fail_authed(&response, "Failed to generate captions"));
        }
        decode(&response.body)
    }

    pub async fn backend_health(&self) -> Result<BackendHealth, ApiError> {
        let request = ApiRequest::get(self.service_url(Service::Backend, "/health"), None);
        let response = self.transport.execute(request).await?;
        decode(&response.body)
    }

    pub async fn auth_health(&self) -> Result<AuthHealth, ApiError> {
        let request = ApiRequest::get(self.service_url(Service::Auth, "/health"), None);
        let response = self.transport.execute(request).await?;
        decode(&response.body)
    }

    // ============ Internals ============

    async fn authed_get<D: DeserializeOwned>(
        &self,
        service: Service,
        path: &str,
        fallback: &str,
    ) -> Result<D, ApiError> {
        let request = ApiRequest::get(self.service_url(service, path), self.token());
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(self.fail_authed(&response, fallback));
        }
        decode(&response.body)
    }

    fn service_url(&self, service: Service, path: &str) -> String {
        let origin = self.origin.current_origin();
        let context = if origin.is_some() {
            ExecutionContext::Browser
        } else {
            ExecutionContext::Server
        };
        let base = self.resolver.resolve(service, context, origin.as_deref());
        format!("{}{path}", base.trim_end_matches('/'))
    }

    /// Non-2xx from an authenticated call. A 401 clears the stored token
    /// before the error is surfaced; other statuses leave it untouched.
    fn fail_authed(&self, response: &RawResponse, fallback: &str) -> ApiError {
        if response.status == 401 {
            self.clear_token();
            return ApiError::Unauthorized;
        }
        fail(response, fallback)
    }

    fn store_token(&self, token: &str) {
        self.tokens.save(token);
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        self.tokens.clear();
        *self.token.borrow_mut() = None;
    }
}

/// Non-2xx from an unauthenticated call: extract the server's message.
fn fail(response: &RawResponse, fallback: &str) -> ApiError {
    ApiError::Api {
        status: response.status,
        message: error_message(&response.body, fallback),
    }
}

fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("error"))
                .and_then(|m| m.as_str().map(str::to_owned))
        })
        .unwrap_or_else(|| fallback.to_owned())
}

fn decode<D: DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::endpoint::{EndpointOverrides, FixedOrigin};
    use crate::token::MemoryTokens;
    use crate::types::CaptionTone;

    /// Transport double that records every request and replays scripted
    /// responses in order.
    #[derive(Default)]
    struct ScriptedTransport {
        requests: RefCell<Vec<ApiRequest>>,
        responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
    }

    impl ScriptedTransport {
        fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_owned(),
            }));
        }

        fn respond_err(&self, err: ApiError) {
            self.responses.borrow_mut().push_back(Err(err));
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        fn request(&self, index: usize) -> ApiRequest {
            self.requests.borrow()[index].clone()
        }
    }

    impl ApiTransport for ScriptedTransport {
        async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("a scripted response for every request")
        }
    }

    type TestApi = CaptionApi<Rc<ScriptedTransport>, Rc<MemoryTokens>, FixedOrigin>;

    fn api(transport: &Rc<ScriptedTransport>, tokens: &Rc<MemoryTokens>) -> TestApi {
        CaptionApi::new(
            EndpointResolver::new(EndpointOverrides::default()),
            Rc::clone(transport),
            Rc::clone(tokens),
            FixedOrigin(Some("http://localhost:3000".to_owned())),
        )
    }

    const SESSION_BODY: &str = r#"{
        "access_token": "tok-123",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": {"id": "u1", "email": "ada@example.com", "full_name": "Ada L"}
    }"#;

    #[tokio::test]
    async fn login_persists_token() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::new());
        let client = api(&transport, &tokens);
        transport.respond(200, SESSION_BODY);

        let session = client.login("ada@example.com", "hunter2").await.unwrap();

        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(tokens.current().as_deref(), Some("tok-123"));
        assert_eq!(client.token().as_deref(), Some("tok-123"));
        assert_eq!(
            transport.request(0).url,
            "http://localhost:4000/login"
        );
    }

    #[tokio::test]
    async fn signup_persists_token() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::new());
        let client = api(&transport, &tokens);
        transport.respond(201, SESSION_BODY);

        client.signup("ada@example.com", "hunter2", "Ada L").await.unwrap();

        assert_eq!(tokens.current().as_deref(), Some("tok-123"));
        assert_eq!(transport.request(0).url, "http://localhost:4000/signup");
    }

    #[tokio::test]
    async fn login_failure_surfaces_server_detail() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::new());
        let client = api(&transport, &tokens);
        transport.respond(401, r#"{"detail": "Invalid email or password"}"#);

        let err = client.login("ada@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn unauthorized_clears_stored_token() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("stale"));
        let client = api(&transport, &tokens);
        transport.respond(401, r#"{"detail": "Token expired"}"#);

        let err = client.subscription().await.unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized));
        assert!(tokens.current().is_none());
        assert!(client.token().is_none());
    }

    #[tokio::test]
    async fn other_failures_leave_token_untouched() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = api(&transport, &tokens);
        transport.respond(500, "not json at all");

        let err = client.subscription().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch subscription");
        assert_eq!(tokens.current().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn exhausted_quota_skips_the_upload() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = api(&transport, &tokens);
        transport.respond(
            200,
            r#"{"has_remaining": false, "captions_remaining": 0, "captions_limit": 10, "captions_used": 10}"#,
        );

        let media = MediaUpload {
            bytes: vec![0u8; 2048],
            file_name: "beach.png".to_owned(),
            content_type: "image/png".to_owned(),
        };
        let err = client
            .generate_captions(media, &CaptionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::QuotaExceeded));
        // Only the limit check went out; the upload never did.
        assert_eq!(transport.request_count(), 1);
        assert!(transport.request(0).url.ends_with("/caption/check-limit"));
    }

    #[tokio::test]
    async fn generation_uploads_after_the_limit_check() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = api(&transport, &tokens);
        transport.respond(
            200,
            r#"{"has_remaining": true, "captions_remaining": 3, "captions_limit": 10, "captions_used": 7}"#,
        );
        transport.respond(200, r#"{"captions": "Golden hour, golden mood."}"#);

        let media = MediaUpload {
            bytes: vec![1, 2, 3],
            file_name: "sunset.jpg".to_owned(),
            content_type: "image/jpeg".to_owned(),
        };
        let options = CaptionOptions {
            tone: CaptionTone::Humorous,
            ..CaptionOptions::default()
        };
        let generated = client.generate_captions(media, &options).await.unwrap();

        assert_eq!(generated.captions, "Golden hour, golden mood.");
        assert_eq!(transport.request_count(), 2);

        let upload = transport.request(1);
        assert_eq!(upload.url, "http://localhost:5000/generate-captions");
        assert_eq!(upload.bearer.as_deref(), Some("tok"));
        match upload.body {
            RequestBody::CaptionUpload { media, fields } => {
                assert_eq!(media.file_name, "sunset.jpg");
                assert!(fields.contains(&("tone", "humorous".to_owned())));
                assert!(fields.contains(&("fileType", "image".to_owned())));
                assert!(fields.contains(&("hashtagCount", "5".to_owned())));
            }
            other => panic!("expected a multipart upload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn validate_token_without_token_issues_no_request() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::new());
        let client = api(&transport, &tokens);

        let validation = client.validate_token().await;

        assert!(!validation.valid);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn validate_token_failure_clears_the_token() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = api(&transport, &tokens);
        transport.respond_err(ApiError::Network("connection refused".to_owned()));

        let validation = client.validate_token().await;

        assert!(!validation.valid);
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn token_is_read_once_at_construction() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = api(&transport, &tokens);

        // External mutation of the store is invisible mid-session.
        tokens.clear();
        assert_eq!(client.token().as_deref(), Some("tok"));

        transport.respond(200, r#"{"id": "u1", "email": "a@b.c", "full_name": "A"}"#);
        client.current_user().await.unwrap();
        assert_eq!(transport.request(0).bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn endpoints_are_re_resolved_per_call() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = CaptionApi::new(
            EndpointResolver::new(EndpointOverrides::default()),
            Rc::clone(&transport),
            Rc::clone(&tokens),
            FixedOrigin(Some("https://shiny-box-3000.app.github.dev".to_owned())),
        );
        transport.respond(200, r#"{"id": "u1", "email": "a@b.c", "full_name": "A"}"#);

        client.current_user().await.unwrap();

        assert_eq!(
            transport.request(0).url,
            "https://shiny-box-4000.app.github.dev/me"
        );
    }

    #[tokio::test]
    async fn logout_clears_stored_and_in_memory_token() {
        let transport = ScriptedTransport::new();
        let tokens = Rc::new(MemoryTokens::with_token("tok"));
        let client = api(&transport, &tokens);

        client.logout();

        assert!(tokens.current().is_none());
        assert!(!client.is_authenticated());
        assert_eq!(transport.request_count(), 0);
    }
}
