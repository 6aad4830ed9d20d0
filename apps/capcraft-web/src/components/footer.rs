use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer p-10 bg-base-100 text-base-content border-t border-base-300">
            <aside>
                <span class="text-lg font-bold">"Caption"<span class="text-primary">"Craft"</span></span>
                <p class="text-sm opacity-70">"AI-powered captions for your images and videos."</p>
            </aside>
            <nav>
                <h6 class="footer-title">"Product"</h6>
                <a href="/generator" class="link link-hover">"Generator"</a>
                <a href="/pricing" class="link link-hover">"Pricing"</a>
            </nav>
            <nav>
                <h6 class="footer-title">"Company"</h6>
                <a href="/contact" class="link link-hover">"Contact"</a>
                <a href="/#faq" class="link link-hover">"FAQ"</a>
            </nav>
        </footer>
    }
}
