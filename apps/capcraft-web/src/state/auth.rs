use capcraft_client::User;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::services::config;

#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn display_name(&self) -> Option<String> {
        self.user.get().map(|u| u.full_name)
    }

    pub fn set_user(&self, user: Option<User>) {
        self.user.set(user);
        self.loading.set(false);
    }

    pub fn logout(&self) {
        self.user.set(None);
        #[cfg(target_arch = "wasm32")]
        {
            // Clears localStorage and the in-memory copy.
            config::new_api().logout();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide auth context to the application.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();

    // Validate any stored token on mount and hydrate the session.
    #[cfg(target_arch = "wasm32")]
    {
        let auth_clone = auth;
        Effect::new(move || {
            spawn_local(async move {
                let api = config::new_api();
                let validation = api.validate_token().await;
                if validation.valid {
                    auth_clone.set_user(validation.user);
                } else {
                    auth_clone.set_user(None);
                }
            });
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        auth.loading.set(false);
    }

    provide_context(auth);

    children()
}

/// Get auth context from anywhere in the component tree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
