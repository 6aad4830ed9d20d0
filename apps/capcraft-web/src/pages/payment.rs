use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

struct PlanDetails {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
}

fn plan_details(plan: &str) -> PlanDetails {
    match plan {
        "pro" => PlanDetails {
            name: "Pro Plan",
            price: "$10",
            features: &[
                "Unlimited captions",
                "Multi-language support",
                "Custom tones",
                "Priority support",
                "Advanced analytics",
            ],
        },
        "enterprise" => PlanDetails {
            name: "Enterprise Plan",
            price: "Custom",
            features: &[
                "All Pro features",
                "Team accounts",
                "API access",
                "Dedicated account manager",
                "Custom integrations",
            ],
        },
        _ => PlanDetails {
            name: "Basic Plan",
            price: "$0",
            features: &["Limited features"],
        },
    }
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let query = use_query_map();
    let plan = move || query.with(|q| q.get("plan")).unwrap_or_else(|| "pro".to_string());
    let (confirmed, set_confirmed) = signal(false);

    view! {
        <section class="py-12 px-4">
            <div class="container mx-auto max-w-4xl space-y-8">
                <a href="/pricing" class="link link-primary inline-flex items-center gap-1">
                    "← Back to Pricing"
                </a>

                <div class="text-center">
                    <h1 class="text-4xl font-bold mb-2">"Complete Your Payment"</h1>
                    <p class="text-base-content/70">
                        {move || format!("You're upgrading to the {}", plan_details(&plan()).name)}
                    </p>
                </div>

                <Show when=move || confirmed.get()>
                    <div class="alert alert-success">
                        <span>
                            "Payment received. Your plan will be active within a few minutes — check "
                            <a href="/account" class="link font-semibold">"your account"</a>
                            " for the updated limits."
                        </span>
                    </div>
                </Show>

                <div class="grid md:grid-cols-2 gap-8">
                    <div class="card bg-base-100 shadow-md">
                        <div class="card-body items-center space-y-4">
                            <h2 class="card-title">"Scan QR Code to Pay"</h2>
                            <div class="bg-base-200 rounded-lg w-64 h-64 flex items-center justify-center text-base-content/40">
                                "QR code"
                            </div>
                            <p class="text-center text-sm text-base-content/70">
                                "Scan the QR code with your payment app to complete the transaction"
                            </p>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-md">
                        <div class="card-body space-y-4">
                            <h2 class="card-title">"Payment Details"</h2>

                            <div class="text-sm">
                                <div class="flex justify-between py-2 border-b border-base-200">
                                    <span class="text-base-content/70">"Plan"</span>
                                    <span class="font-semibold">{move || plan_details(&plan()).name}</span>
                                </div>
                                <div class="flex justify-between py-2 border-b border-base-200">
                                    <span class="text-base-content/70">"Billing"</span>
                                    <span class="font-semibold">"Monthly"</span>
                                </div>
                                <div class="flex justify-between py-2 border-b border-base-200">
                                    <span class="text-base-content/70">"Amount"</span>
                                    <span class="font-semibold">
                                        {move || format!("{}/month", plan_details(&plan()).price)}
                                    </span>
                                </div>
                            </div>

                            <div class="bg-base-200 rounded-lg p-4">
                                <h3 class="font-semibold mb-2">"What's included:"</h3>
                                <ul class="space-y-1 text-sm">
                                    {move || {
                                        plan_details(&plan())
                                            .features
                                            .iter()
                                            .map(|feature| view! {
                                                <li class="flex items-center gap-2">
                                                    <span class="text-primary">"✓"</span>
                                                    {*feature}
                                                </li>
                                            })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>

                            <button
                                class="btn btn-primary w-full"
                                on:click=move |_| set_confirmed.set(true)
                            >
                                "Confirm Payment"
                            </button>
                            <p class="text-xs text-center text-base-content/60">
                                "By confirming your payment, you agree to our Terms of Service and Privacy Policy"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
