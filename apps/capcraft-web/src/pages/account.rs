use capcraft_client::{Subscription, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{Card, CardBody, CardTitle, Spinner, SpinnerSize};
use crate::services::config;
use crate::state::auth::use_auth;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (profile, set_profile) = signal::<Option<User>>(None);
    let (subscription, set_subscription) = signal::<Option<Subscription>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Redirect if not authenticated
    Effect::new(move || {
        if !auth.is_loading() && !auth.is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    // Load profile and subscription once the session is confirmed.
    Effect::new(move || {
        if auth.is_authenticated() && profile.with(|p| p.is_none()) {
            spawn_local(async move {
                let api = config::new_api();
                match api.current_user().await {
                    Ok(user) => set_profile.set(Some(user)),
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        return;
                    }
                }
                match api.subscription().await {
                    Ok(sub) => set_subscription.set(Some(sub)),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    });

    let plan_name = move || {
        subscription
            .get()
            .map(|s| s.plan_name)
            .unwrap_or_else(|| "Free".to_string())
    };
    let captions_used = move || subscription.get().map(|s| s.captions_used()).unwrap_or(0);
    let captions_limit = move || subscription.get().map(|s| s.captions_limit).unwrap_or(0);
    // Advanced captions are a paid-plan feature; free plans have none.
    let advanced_limit = move || {
        subscription
            .get()
            .map(|s| if s.is_free_plan() { 0 } else { 100 })
            .unwrap_or(0)
    };

    view! {
        <section class="py-12 px-4">
            <div class="container mx-auto max-w-4xl space-y-6">
                <h1 class="text-3xl font-bold">"Account Settings"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || profile.with(|p| p.is_some())
                    fallback=|| view! {
                        <div class="flex justify-center py-12">
                            <Spinner size=SpinnerSize::Lg/>
                        </div>
                    }
                >
                    <div class="grid md:grid-cols-2 gap-6">
                        <Card>
                            <CardBody>
                                <CardTitle>"Profile"</CardTitle>
                                <div class="space-y-2 text-sm">
                                    <div class="flex justify-between py-2 border-b border-base-200">
                                        <span class="text-base-content/70">"Name"</span>
                                        <span class="font-medium">
                                            {move || profile.get().map(|u| u.full_name).unwrap_or_default()}
                                        </span>
                                    </div>
                                    <div class="flex justify-between py-2 border-b border-base-200">
                                        <span class="text-base-content/70">"Email"</span>
                                        <span class="font-medium">
                                            {move || profile.get().map(|u| u.email).unwrap_or_default()}
                                        </span>
                                    </div>
                                    <div class="flex justify-between py-2">
                                        <span class="text-base-content/70">"Plan"</span>
                                        <span class="badge badge-primary badge-outline">{plan_name}</span>
                                    </div>
                                </div>
                                <div class="card-actions justify-end mt-4">
                                    <a href="/pricing" class="btn btn-primary btn-sm">"Upgrade plan"</a>
                                    <button class="btn btn-ghost btn-sm" on:click=move |_| auth.logout()>
                                        "Logout"
                                    </button>
                                </div>
                            </CardBody>
                        </Card>

                        <Card>
                            <CardBody>
                                <CardTitle>"Usage this period"</CardTitle>

                                <div class="space-y-4">
                                    <div>
                                        <div class="flex justify-between text-sm mb-1">
                                            <span>"Basic captions"</span>
                                            <span class="text-base-content/70">
                                                {move || format!("{} / {}", captions_used(), captions_limit())}
                                            </span>
                                        </div>
                                        <progress
                                            class="progress progress-primary w-full"
                                            prop:value=move || captions_used().to_string()
                                            prop:max=move || captions_limit().max(1).to_string()
                                        ></progress>
                                    </div>

                                    <div>
                                        <div class="flex justify-between text-sm mb-1">
                                            <span>"Advanced captions"</span>
                                            <span class="text-base-content/70">
                                                {move || {
                                                    let limit = advanced_limit();
                                                    if limit == 0 {
                                                        "Pro plans only".to_string()
                                                    } else {
                                                        format!("0 / {limit}")
                                                    }
                                                }}
                                            </span>
                                        </div>
                                        <progress
                                            class="progress progress-secondary w-full"
                                            prop:value="0"
                                            prop:max=move || advanced_limit().max(1).to_string()
                                        ></progress>
                                    </div>
                                </div>

                                <Show when=move || subscription.get().map(|s| s.status != "active").unwrap_or(false)>
                                    <div class="alert alert-warning mt-4">
                                        <span>"Your subscription is not active. Renew it to keep your plan benefits."</span>
                                    </div>
                                </Show>
                            </CardBody>
                        </Card>
                    </div>
                </Show>
            </div>
        </section>
    }
}
