//! Typed HTTP client for the CaptionCraft services.
//!
//! The frontend delegates everything non-trivial to two external services:
//! an auth service (accounts, sessions, subscription and quota records) and
//! a caption generation backend (file in, captions out). This crate owns
//! the two pieces of real logic on this side of the wire:
//!
//! - [`endpoint`]: environment-aware resolution of each service's base URL
//!   across local development, port-forwarding sandboxes, and production.
//! - [`client`]: a typed wrapper over those endpoints with bearer-token
//!   lifecycle handling and a pre-upload quota guard.
//!
//! Browser bindings (localStorage, `window.location`) are cfg-gated so the
//! crate compiles and tests natively.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod token;
pub mod transport;
pub mod types;

pub use client::{BrowserApi, CaptionApi};
pub use endpoint::{
    BrowserOrigin, EndpointOverrides, EndpointResolver, ExecutionContext, FixedOrigin,
    OriginProvider, OverridePrecedence, Service,
};
pub use error::ApiError;
pub use token::{LocalStorageTokens, MemoryTokens, TokenStore, TOKEN_STORAGE_KEY};
pub use transport::{ApiRequest, ApiTransport, FetchTransport, HttpMethod, RawResponse, RequestBody};
pub use types::{
    AuthHealth, AuthSession, BackendHealth, CaptionAllowance, CaptionLength, CaptionOptions,
    CaptionTone, GeneratedCaptions, MediaKind, MediaUpload, Subscription, TokenValidation, User,
    DEFAULT_HASHTAG_COUNT,
};
