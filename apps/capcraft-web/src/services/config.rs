//! Build-time configuration for the web app.
//!
//! Service URL overrides are baked in at compile time (trunk builds export
//! them into the environment); everything origin-dependent is handled per
//! call by the resolver, so a page served from a different preview domain
//! keeps routing correctly without a rebuild.

use capcraft_client::{BrowserApi, EndpointOverrides, EndpointResolver};

/// Explicit service URLs, if the build provided any.
///
/// `CAPCRAFT_AUTH_URL` / `CAPCRAFT_API_URL` are expected to be production
/// absolute URLs; localhost values are treated as "not configured" by the
/// resolver's browser branch.
pub fn endpoint_overrides() -> EndpointOverrides {
    EndpointOverrides {
        auth: option_env!("CAPCRAFT_AUTH_URL").map(str::to_owned),
        backend: option_env!("CAPCRAFT_API_URL").map(str::to_owned),
    }
}

/// A fresh browser API client.
///
/// Construction is cheap; each interactive component builds and owns its
/// instance, which keeps token state explicit instead of hiding it in a
/// module singleton.
pub fn new_api() -> BrowserApi {
    BrowserApi::browser(EndpointResolver::new(endpoint_overrides()))
}
