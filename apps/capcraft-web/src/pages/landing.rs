use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div>
            <HeroSection/>
            <FeaturesSection/>
            <HowItWorksSection/>
            <TestimonialsSection/>
            <PricingPreviewSection/>
            <FaqSection/>
            <FinalCtaSection/>
        </div>
    }
}

// -- Hero -------------------------------------------------------------------

const TONE_EXAMPLES: [(&str, &str, &str); 5] = [
    ("📜", "Formal", "This serene landscape showcases the beauty of nature's harmony."),
    ("😎", "Casual", "Weekend vibes: A little coffee, a little sunshine, and a lot of good energy! ☀️"),
    ("💼", "Professional", "Breaking barriers and building a legacy – one step at a time."),
    ("🤝", "Friendly", "Sharing this little slice of joy with you all! What's bringing you happiness today? 💛"),
    ("😂", "Humorous", "When life gives you lemons, trade them for pizza 🍕✨ Priorities, am I right?"),
];

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-b from-base-100 to-base-200">
            <div class="container mx-auto px-4">
                <div class="flex flex-col lg:flex-row items-center justify-between gap-12">
                    <div class="lg:w-1/2 space-y-6">
                        <h1 class="text-5xl font-bold leading-tight">
                            "AI-Powered Captions for Your "
                            <span class="text-primary">"Content"</span>
                        </h1>
                        <p class="text-xl text-base-content/70">
                            "Upload an image or video and get scroll-stopping captions in any tone, in seconds."
                        </p>
                        <div class="flex gap-3">
                            <a href="/generator" class="btn btn-primary btn-lg">"Try it free"</a>
                            <a href="/pricing" class="btn btn-ghost btn-lg">"See pricing"</a>
                        </div>
                    </div>

                    <div class="lg:w-1/2 space-y-3">
                        {TONE_EXAMPLES
                            .iter()
                            .map(|(emoji, tone, text)| view! {
                                <div class="card bg-base-100 shadow-sm">
                                    <div class="card-body py-3 px-5 flex-row items-center gap-4">
                                        <span class="text-2xl">{*emoji}</span>
                                        <div>
                                            <span class="badge badge-ghost badge-sm mb-1">{*tone}</span>
                                            <p class="text-sm text-base-content/80">{*text}</p>
                                        </div>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

// -- Features ---------------------------------------------------------------

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎨", "Customizable Captions", "Tailor your captions to any style, tone, or audience."),
    ("🌍", "Multi-Language Support", "Supports English, Hindi, and more."),
    ("⚡", "Hassle-Free", "Generate captions in seconds without any technical knowledge."),
];

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-base-100">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Why CaptionCraft"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, description)| view! {
                            <div class="text-center space-y-2">
                                <div class="text-4xl">{*icon}</div>
                                <h3 class="text-xl font-semibold">{*title}</h3>
                                <p class="text-base-content/70">{*description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// -- How it works -----------------------------------------------------------

const STEPS: [(&str, &str); 3] = [
    ("Upload your image or video", "Drag-and-drop interface or a file uploader with preview."),
    ("Customize your captions", "Choose writing tone, caption length, and hashtags."),
    ("Get captions instantly", "Copy, download, or share captions with a click."),
];

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-base-200">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"How it works"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, (title, description))| view! {
                            <div class="card bg-base-100 shadow-sm">
                                <div class="card-body items-center text-center">
                                    <div class="badge badge-primary badge-lg mb-2">
                                        {(index + 1).to_string()}
                                    </div>
                                    <h3 class="text-xl font-semibold">{*title}</h3>
                                    <p class="text-base-content/70">{*description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// -- Testimonials -----------------------------------------------------------

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Sarah Johnson",
        "Social Media Influencer",
        "CaptionCraft has revolutionized my content creation process. It saves me hours every week!",
    ),
    (
        "Michael Chen",
        "Marketing Manager",
        "The AI-generated captions are spot-on and easily customizable. A must-have tool for any marketer.",
    ),
    (
        "Emily Rodriguez",
        "Small Business Owner",
        "CaptionCraft has helped me engage with my audience more effectively. It's user-friendly and produces great results.",
    ),
];

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-base-100">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Loved by creators"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .map(|(name, role, quote)| view! {
                            <div class="card bg-base-200">
                                <div class="card-body">
                                    <p class="text-base-content/80 italic">{format!("\u{201c}{quote}\u{201d}")}</p>
                                    <div class="mt-4">
                                        <p class="font-semibold">{*name}</p>
                                        <p class="text-sm text-primary">{*role}</p>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// -- Pricing preview --------------------------------------------------------

#[component]
fn PricingPreviewSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-base-200">
            <div class="container mx-auto px-4 max-w-3xl">
                <h2 class="text-3xl font-bold text-center mb-12">"Start free, upgrade when you grow"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow-md">
                        <div class="card-body">
                            <h3 class="text-2xl font-semibold">"Free"</h3>
                            <p class="text-4xl font-bold my-2">"$0"</p>
                            <p class="text-base-content/70">"10 captions a month to get going."</p>
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow-xl border-2 border-primary">
                        <div class="card-body">
                            <h3 class="text-2xl font-semibold">"Pro"</h3>
                            <p class="text-4xl font-bold my-2">
                                "$10"<span class="text-base font-normal text-base-content/70">"/month"</span>
                            </p>
                            <p class="text-base-content/70">"Unlimited captions, every tone, priority support."</p>
                        </div>
                    </div>
                </div>
                <div class="text-center mt-8">
                    <a href="/pricing" class="btn btn-outline">"Compare all plans"</a>
                </div>
            </div>
        </section>
    }
}

// -- FAQ --------------------------------------------------------------------

const FAQS: [(&str, &str); 5] = [
    (
        "Can I cancel my subscription anytime?",
        "Yes, you can cancel your subscription at any time. If you cancel, you'll be able to use your plan until the end of your current billing cycle.",
    ),
    (
        "What is the character limit per caption?",
        "The character limit per caption varies depending on the platform you're using. We support up to 2,200 characters for Instagram captions, 280 characters for Twitter, and custom limits for other platforms.",
    ),
    (
        "How accurate are the AI-generated captions?",
        "Our AI model is trained on a vast dataset and continuously improved. While the accuracy is high, we always recommend reviewing and adjusting the generated captions to ensure they perfectly match your voice and style.",
    ),
    (
        "Do you offer refunds?",
        "We offer a 14-day money-back guarantee for our Pro plan. If you're not satisfied with our service, you can request a full refund within the first 14 days of your subscription.",
    ),
    (
        "Can I switch between plans?",
        "Yes, you can upgrade or downgrade your plan at any time. The changes will be reflected in your next billing cycle.",
    ),
];

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 bg-base-100">
            <div class="container mx-auto px-4 max-w-3xl">
                <h2 class="text-3xl font-bold text-center mb-12">"Frequently Asked Questions"</h2>
                <div class="space-y-2">
                    {FAQS
                        .iter()
                        .map(|(question, answer)| view! {
                            <div class="collapse collapse-arrow bg-base-200">
                                <input type="radio" name="faq-accordion"/>
                                <div class="collapse-title text-lg font-semibold">{*question}</div>
                                <div class="collapse-content text-base-content/70">
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// -- Final CTA --------------------------------------------------------------

#[component]
fn FinalCtaSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-primary text-primary-content">
            <div class="container mx-auto px-4 text-center space-y-6">
                <h2 class="text-3xl font-bold">"Ready to craft better captions?"</h2>
                <p class="opacity-80">"Join thousands of creators saving hours every week."</p>
                <a href="/signup" class="btn btn-lg bg-base-100 text-base-content hover:bg-base-200">
                    "Get started for free"
                </a>
            </div>
        </section>
    }
}
