use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-base-content/30">"404"</h1>
                <p class="text-base-content/70">"This page doesn't exist."</p>
                <a href="/" class="btn btn-primary">"Back home"</a>
            </div>
        </div>
    }
}
