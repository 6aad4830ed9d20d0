//! Environment-aware service endpoint resolution.
//!
//! The frontend is deployed in three topologies: plain local development
//! (every service on its conventional localhost port), a Codespaces-style
//! sandbox where each forwarded port gets its own public hostname, and a
//! production origin with explicitly configured service URLs. Resolution is
//! a pure function of the current origin and the configured overrides so it
//! can be exercised without a browser.

use std::sync::LazyLock;

use regex::Regex;

/// Where the resolution is happening.
///
/// `Browser` means a window origin is available and sandbox rewriting may
/// apply; `Server` means direct internal addressing (the sandbox proxy only
/// forwards browser-originated traffic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    Server,
    Browser,
}

/// Logical service the frontend talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    /// Account/session service (signup, login, subscription, quota).
    Auth,
    /// Caption generation backend.
    Backend,
}

impl Service {
    /// Conventional development port for the service.
    pub fn default_port(self) -> u16 {
        match self {
            Service::Auth => 4000,
            Service::Backend => 5000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Service::Auth => "auth",
            Service::Backend => "backend",
        }
    }
}

/// Explicitly configured base URLs, typically baked in at build time.
#[derive(Clone, Debug, Default)]
pub struct EndpointOverrides {
    pub auth: Option<String>,
    pub backend: Option<String>,
}

/// Which source wins when a sandbox origin and an explicit override could
/// both apply.
///
/// `SandboxFirst` assumes overrides still point at `localhost` and are
/// unreachable from inside the forwarding sandbox. `OverrideFirst` is for
/// deployments where the override is correct even there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverridePrecedence {
    #[default]
    SandboxFirst,
    OverrideFirst,
}

/// Maps `(Service, ExecutionContext, origin)` to a base URL.
#[derive(Clone, Debug, Default)]
pub struct EndpointResolver {
    overrides: EndpointOverrides,
    precedence: OverridePrecedence,
}

const LOCALHOST: &str = "localhost";

/// Every recognized forwarding domain ends with this suffix.
const SANDBOX_SUFFIX: &str = ".github.dev";

/// `https://{name}-{port}.app.github.dev` and friends. `{name}` may itself
/// contain hyphens, so the greedy base group pins the match to the *last*
/// `-{digits}` boundary before the domain suffix.
static SANDBOX_ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(.+)-(\d+)(\.(?:preview\.)?app\.github\.dev|\.github\.dev)")
        .expect("sandbox origin pattern is valid")
});

impl EndpointResolver {
    pub fn new(overrides: EndpointOverrides) -> Self {
        Self {
            overrides,
            precedence: OverridePrecedence::default(),
        }
    }

    pub fn with_precedence(mut self, precedence: OverridePrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Resolve the base URL for `service`.
    ///
    /// Pure function of its inputs; computed fresh on every call because a
    /// browser origin can change between renders. Always returns a valid
    /// absolute URL and never panics on malformed origins.
    pub fn resolve(
        &self,
        service: Service,
        context: ExecutionContext,
        origin: Option<&str>,
    ) -> String {
        let port = service.default_port();
        let override_url = self.override_for(service);

        let resolved = match context {
            ExecutionContext::Server => override_url
                .map(str::to_owned)
                .unwrap_or_else(|| local_url(port)),
            ExecutionContext::Browser => self.resolve_browser(origin, override_url, port),
        };

        if cfg!(debug_assertions) {
            tracing::debug!(
                service = service.name(),
                context = ?context,
                origin,
                override_url,
                resolved = resolved.as_str(),
                "resolved service endpoint"
            );
        }

        resolved
    }

    fn resolve_browser(
        &self,
        origin: Option<&str>,
        override_url: Option<&str>,
        port: u16,
    ) -> String {
        let sandbox = origin.and_then(|o| rewrite_sandbox_origin(o, port));
        let usable_override = override_url
            .filter(|url| !url.contains(LOCALHOST))
            .map(str::to_owned);

        match self.precedence {
            OverridePrecedence::SandboxFirst => sandbox.or(usable_override),
            OverridePrecedence::OverrideFirst => usable_override.or(sandbox),
        }
        .unwrap_or_else(|| local_url(port))
    }

    fn override_for(&self, service: Service) -> Option<&str> {
        match service {
            Service::Auth => self.overrides.auth.as_deref(),
            Service::Backend => self.overrides.backend.as_deref(),
        }
    }
}

/// Rewrite a sandbox origin to address the same workspace on `port`.
///
/// Returns `None` when the origin is not a forwarding-domain origin, or when
/// it carries the suffix but not the `-{port}` hostname shape; the latter is
/// logged so operators can spot routing mismatches.
fn rewrite_sandbox_origin(origin: &str, port: u16) -> Option<String> {
    if !origin.contains(SANDBOX_SUFFIX) {
        return None;
    }

    match SANDBOX_ORIGIN.captures(origin) {
        Some(caps) => {
            let base = caps.get(1)?.as_str();
            let suffix = caps.get(3)?.as_str();
            Some(format!("https://{base}-{port}{suffix}"))
        }
        None => {
            tracing::debug!(origin, "forwarding-domain origin did not match the sandbox pattern");
            None
        }
    }
}

fn local_url(port: u16) -> String {
    format!("http://{LOCALHOST}:{port}")
}

/// Supplies the origin the page was loaded from, if any.
///
/// `Some` implies browser execution; `None` implies server-side. Kept as a
/// seam so resolution stays testable without simulating a window.
pub trait OriginProvider {
    fn current_origin(&self) -> Option<String>;
}

impl<O: OriginProvider> OriginProvider for std::rc::Rc<O> {
    fn current_origin(&self) -> Option<String> {
        (**self).current_origin()
    }
}

/// Reads `window.location.origin`; reports no origin off-wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserOrigin;

#[cfg(target_arch = "wasm32")]
impl OriginProvider for BrowserOrigin {
    fn current_origin(&self) -> Option<String> {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl OriginProvider for BrowserOrigin {
    fn current_origin(&self) -> Option<String> {
        None
    }
}

/// Fixed origin for tests and server-side construction.
#[derive(Clone, Debug, Default)]
pub struct FixedOrigin(pub Option<String>);

impl OriginProvider for FixedOrigin {
    fn current_origin(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(auth: Option<&str>, backend: Option<&str>) -> EndpointResolver {
        EndpointResolver::new(EndpointOverrides {
            auth: auth.map(str::to_owned),
            backend: backend.map(str::to_owned),
        })
    }

    #[test]
    fn server_context_uses_override_when_present() {
        let r = resolver(Some("http://auth.internal:4000"), None);
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Server, None),
            "http://auth.internal:4000"
        );
    }

    #[test]
    fn server_context_falls_back_to_localhost() {
        let r = resolver(None, None);
        assert_eq!(
            r.resolve(Service::Backend, ExecutionContext::Server, None),
            "http://localhost:5000"
        );
    }

    #[test]
    fn server_context_never_inspects_origin() {
        // Even a sandbox origin must not trigger rewriting server-side.
        let r = resolver(None, None);
        let origin = Some("https://workspace-3000.app.github.dev");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Server, origin),
            "http://localhost:4000"
        );
    }

    #[test]
    fn sandbox_origin_is_rewritten_to_target_port() {
        let r = resolver(None, None);
        let origin = Some("https://reimagined-enigma-qgq659w9q44h45x4-3000.app.github.dev");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "https://reimagined-enigma-qgq659w9q44h45x4-4000.app.github.dev"
        );
    }

    #[test]
    fn sandbox_rewrite_is_independent_of_original_port() {
        let r = resolver(None, None);
        for original in ["3000", "8080", "443"] {
            let origin = format!("https://my-work-space-{original}.app.github.dev");
            assert_eq!(
                r.resolve(Service::Backend, ExecutionContext::Browser, Some(&origin)),
                "https://my-work-space-5000.app.github.dev"
            );
        }
    }

    #[test]
    fn sandbox_rewrite_handles_all_domain_variants() {
        let r = resolver(None, None);
        let cases = [
            (
                "https://box-3000.preview.app.github.dev",
                "https://box-4000.preview.app.github.dev",
            ),
            ("https://box-3000.github.dev", "https://box-4000.github.dev"),
        ];
        for (origin, expected) in cases {
            assert_eq!(
                r.resolve(Service::Auth, ExecutionContext::Browser, Some(origin)),
                expected
            );
        }
    }

    #[test]
    fn sandbox_beats_override_by_default() {
        let r = resolver(Some("https://auth.example.com"), None);
        let origin = Some("https://box-3000.app.github.dev");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "https://box-4000.app.github.dev"
        );
    }

    #[test]
    fn override_first_precedence_flips_the_default() {
        let r = resolver(Some("https://auth.example.com"), None)
            .with_precedence(OverridePrecedence::OverrideFirst);
        let origin = Some("https://box-3000.app.github.dev");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "https://auth.example.com"
        );
    }

    #[test]
    fn non_sandbox_origin_uses_override() {
        let r = resolver(Some("https://auth.example.com"), None);
        let origin = Some("https://myapp.example.com");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "https://auth.example.com"
        );
    }

    #[test]
    fn localhost_override_falls_back_to_conventional_port() {
        let r = resolver(Some("http://localhost:4000"), None);
        let origin = Some("http://localhost:3000");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "http://localhost:4000"
        );
    }

    #[test]
    fn no_override_falls_back_to_localhost() {
        let r = resolver(None, None);
        let origin = Some("http://localhost:3000");
        assert_eq!(
            r.resolve(Service::Backend, ExecutionContext::Browser, origin),
            "http://localhost:5000"
        );
    }

    #[test]
    fn malformed_sandbox_host_falls_through_without_panicking() {
        let r = resolver(Some("https://auth.example.com"), None);
        // Carries the forwarding suffix but no -{port} segment.
        let origin = Some("https://no-port-here.example.github.dev");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "https://auth.example.com"
        );
    }

    #[test]
    fn malformed_sandbox_host_without_override_uses_localhost() {
        let r = resolver(None, None);
        let origin = Some("https://nodigits.app.github.dev");
        assert_eq!(
            r.resolve(Service::Auth, ExecutionContext::Browser, origin),
            "http://localhost:4000"
        );
    }

    #[test]
    fn fixed_origin_drives_context() {
        assert_eq!(FixedOrigin(None).current_origin(), None);
        assert_eq!(
            FixedOrigin(Some("https://a.example".into())).current_origin(),
            Some("https://a.example".to_owned())
        );
    }
}
