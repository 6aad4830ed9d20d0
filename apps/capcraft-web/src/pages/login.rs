use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::services::config;
use crate::state::auth::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let navigate_for_effect = navigate.clone();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mail = email.get();
        let pass = password.get();

        if mail.is_empty() || pass.is_empty() {
            set_error.set(Some("Please enter both email and password".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        let auth_clone = auth;
        let navigate_clone = navigate.clone();

        spawn_local(async move {
            let api = config::new_api();
            match api.login(&mail, &pass).await {
                Ok(session) => {
                    auth_clone.set_user(Some(session.user));
                    navigate_clone("/generator", Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    // Redirect if already authenticated
    Effect::new(move || {
        if auth.is_authenticated() {
            navigate_for_effect("/generator", Default::default());
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <div class="card w-96 bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-2xl font-bold text-center">"Welcome back"</h2>
                    <p class="text-base-content/70 text-sm">
                        "Log in to keep generating captions."
                    </p>

                    <form on:submit=on_submit class="space-y-4 mt-4">
                        <Show when=move || error.get().is_some()>
                            <div class="alert alert-error">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                type="email"
                                placeholder="you@example.com"
                                class="input input-bordered"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                type="password"
                                placeholder="••••••••"
                                class="input input-bordered"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=move || loading.get()
                        >
                            <Show when=move || loading.get() fallback=|| "Log in">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Logging in..."
                            </Show>
                        </button>
                    </form>

                    <p class="text-sm text-center mt-4 text-base-content/70">
                        "No account yet? "
                        <a href="/signup" class="link link-primary">"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
