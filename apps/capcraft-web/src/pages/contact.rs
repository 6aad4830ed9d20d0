use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="container mx-auto max-w-3xl">
                <h1 class="text-4xl font-bold text-center mb-2">"Contact Us"</h1>
                <p class="text-center text-base-content/70 mb-10">
                    "We're here to help. Send us a message and we'll get back to you as soon as possible."
                </p>

                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <form class="space-y-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Name"</span>
                                </label>
                                <input type="text" placeholder="Your name" class="input input-bordered"/>
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input type="email" placeholder="Your email" class="input input-bordered"/>
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Message"</span>
                                </label>
                                <textarea placeholder="Your message" class="textarea textarea-bordered h-40"></textarea>
                            </div>
                            <button type="submit" class="btn btn-primary w-full">"Send Message"</button>
                        </form>
                    </div>
                </div>

                <div class="mt-12 text-center space-y-2">
                    <h2 class="text-2xl font-semibold">"Support Info"</h2>
                    <p class="text-base-content/70">"Available Monday to Friday, 9 AM to 6 PM (GMT)"</p>
                    <div class="flex justify-center gap-8">
                        <a href="mailto:support@captioncraft.com" class="link link-primary">
                            "support@captioncraft.com"
                        </a>
                        <a href="tel:+12345678901" class="link link-primary">
                            "+1 (234) 567-8901"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
