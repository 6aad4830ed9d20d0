use leptos::prelude::*;

struct Tier {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Free",
        description: "Great for getting started",
        price: "$0",
        features: &[
            "10 captions/month",
            "Single language",
            "Basic tones",
            "Standard support",
        ],
        highlighted: false,
    },
    Tier {
        name: "Pro",
        description: "Perfect for influencers and marketers",
        price: "$10",
        features: &[
            "Unlimited captions",
            "Multi-language support",
            "Custom tones",
            "Priority support",
            "Advanced analytics",
        ],
        highlighted: true,
    },
    Tier {
        name: "Enterprise",
        description: "For businesses and teams",
        price: "Custom",
        features: &[
            "All Pro features",
            "Team accounts",
            "API access",
            "Dedicated account manager",
            "Custom integrations",
        ],
        highlighted: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="container mx-auto max-w-5xl">
                <h1 class="text-4xl font-bold text-center mb-2">"Simple, transparent pricing"</h1>
                <p class="text-center text-base-content/70 mb-12">
                    "Pick a plan, cancel anytime."
                </p>

                <div class="grid md:grid-cols-3 gap-6">
                    {TIERS
                        .iter()
                        .map(|tier| {
                            let card_class = if tier.highlighted {
                                "card bg-base-100 shadow-xl border-2 border-primary"
                            } else {
                                "card bg-base-100 shadow-md"
                            };
                            let (cta_label, cta_href) = if tier.name == "Enterprise" {
                                ("Contact Sales", "/contact".to_string())
                            } else {
                                ("Choose Plan", format!("/payment?plan={}", tier.name.to_lowercase()))
                            };
                            view! {
                                <div class=card_class>
                                    <div class="card-body">
                                        <h2 class="text-2xl font-semibold">{tier.name}</h2>
                                        <p class="text-base-content/70 text-sm">{tier.description}</p>
                                        <p class="text-4xl font-bold my-4">
                                            {tier.price}
                                            <span class="text-base font-normal text-base-content/70">
                                                {if tier.price != "Custom" { "/month" } else { "" }}
                                            </span>
                                        </p>
                                        <ul class="space-y-2 text-sm flex-1">
                                            {tier
                                                .features
                                                .iter()
                                                .map(|feature| view! {
                                                    <li class="flex items-center gap-2">
                                                        <span class="text-primary">"✓"</span>
                                                        {*feature}
                                                    </li>
                                                })
                                                .collect_view()}
                                        </ul>
                                        <div class="card-actions mt-6">
                                            <a href=cta_href class="btn btn-primary w-full">{cta_label}</a>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
