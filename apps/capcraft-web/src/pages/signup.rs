use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::services::config;
use crate::state::auth::use_auth;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let navigate_for_effect = navigate.clone();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = full_name.get();
        let mail = email.get();
        let pass = password.get();

        if name.is_empty() || mail.is_empty() || pass.is_empty() {
            set_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        if pass != confirm.get() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        let auth_clone = auth;
        let navigate_clone = navigate.clone();

        spawn_local(async move {
            let api = config::new_api();
            match api.signup(&mail, &pass, &name).await {
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
                    <h2 class="card-title text-2xl font-bold">"Create your account"</h2>
                    <p class="text-base-content/70 text-sm">
                        "Start with 10 free captions every month."
                    </p>

                    <form on:submit=on_submit class="space-y-4 mt-4">
                        <Show when=move || error.get().is_some()>
                            <div class="alert alert-error">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Full name"</span>
                            </label>
                            <input
                                type="text"
                                placeholder="Ada Lovelace"
                                class="input input-bordered"
                                prop:value=move || full_name.get()
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            />
                        </div>

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

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Confirm password"</span>
                            </label>
                            <input
                                type="password"
                                placeholder="••••••••"
                                class="input input-bordered"
                                prop:value=move || confirm.get()
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=move || loading.get()
                        >
                            <Show when=move || loading.get() fallback=|| "Sign up">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Creating account..."
                            </Show>
                        </button>
                    </form>

                    <p class="text-sm text-center mt-4 text-base-content/70">
                        "Already have an account? "
                        <a href="/login" class="link link-primary">"Log in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
