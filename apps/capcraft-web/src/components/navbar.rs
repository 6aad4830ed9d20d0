use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="navbar bg-base-100 shadow-lg px-4">
            <div class="flex-1">
                <a href="/" class="btn btn-ghost text-xl">
                    <span class="font-bold">"Caption"<span class="text-primary">"Craft"</span></span>
                </a>
                <div class="hidden md:flex gap-1 ml-4">
                    <a href="/generator" class="btn btn-ghost btn-sm">"Generator"</a>
                    <a href="/pricing" class="btn btn-ghost btn-sm">"Pricing"</a>
                    <a href="/contact" class="btn btn-ghost btn-sm">"Contact"</a>
                </div>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! {
                        <a href="/login" class="btn btn-ghost btn-sm">"Log in"</a>
                        <a href="/signup" class="btn btn-primary btn-sm">"Sign up"</a>
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                            <div class="bg-neutral text-neutral-content rounded-full w-10">
                                <span class="text-xs">
                                    {move || auth.display_name()
                                        .and_then(|n| n.chars().next())
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_else(|| "U".to_string())}
                                </span>
                            </div>
                        </div>
                        <ul tabindex="0" class="mt-3 z-[1] p-2 shadow menu menu-sm dropdown-content bg-base-100 rounded-box w-52">
                            <li><a href="/account">"Account"</a></li>
                            <li>
                                <button on:click=move |_| auth.logout()>
                                    "Logout"
                                </button>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
