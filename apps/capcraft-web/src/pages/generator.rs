use capcraft_client::{
    ApiError, CaptionLength, CaptionOptions, CaptionTone, MediaKind, MediaUpload,
    DEFAULT_HASHTAG_COUNT,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{Alert, AlertVariant, Button, ButtonVariant};
use crate::services::config;
use crate::state::auth::use_auth;

/// A picked file, already read into memory so the submit handler does not
/// have to hold browser handles.
#[derive(Clone)]
struct SelectedFile {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (is_video, set_is_video) = signal(false);
    let (selected, set_selected) = signal::<Option<SelectedFile>>(None);
    let (preview_url, set_preview_url) = signal::<Option<String>>(None);
    let (tone, set_tone) = signal(CaptionTone::default().as_str().to_string());
    let (length, set_length) = signal(CaptionLength::default().as_str().to_string());
    let (hashtags, set_hashtags) = signal(DEFAULT_HASHTAG_COUNT);
    let (captions, set_captions) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (quota_exhausted, set_quota_exhausted) = signal(false);
    let (loading, set_loading) = signal(false);
    let (copied, set_copied) = signal(false);

    // Generation needs a session: the quota check is an authenticated call.
    Effect::new(move || {
        if !auth.is_loading() && !auth.is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    let on_toggle = move |ev: leptos::ev::Event| {
        set_is_video.set(event_target_checked(&ev));
        set_selected.set(None);
        set_preview_url.set(None);
        set_captions.set(String::new());
        set_error.set(None);
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            set_error.set(None);
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let kind = if is_video.get_untracked() {
                MediaKind::Video
            } else {
                MediaKind::Image
            };
            let mime = file.type_();
            if !kind.accepts_mime(&mime) {
                set_error.set(Some(format!("Please upload a {} file", kind.as_str())));
                set_selected.set(None);
                set_preview_url.set(None);
                return;
            }

            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                set_preview_url.set(Some(url));
            }

            let name = file.name();
            spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        set_selected.set(Some(SelectedFile { name, mime, bytes }));
                    }
                    Err(_) => {
                        set_error.set(Some("Failed to read the selected file".to_string()));
                    }
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = selected.get() else {
            set_error.set(Some("Please select a file first".to_string()));
            return;
        };

        set_loading.set(true);
        set_error.set(None);
        set_quota_exhausted.set(false);
        set_copied.set(false);

        let options = CaptionOptions {
            kind: if is_video.get() {
                MediaKind::Video
            } else {
                MediaKind::Image
            },
            tone: CaptionTone::from_value(&tone.get()).unwrap_or_default(),
            length: CaptionLength::from_value(&length.get()).unwrap_or_default(),
            hashtag_count: hashtags.get(),
        };
        let media = MediaUpload {
            bytes: file.bytes,
            file_name: file.name,
            content_type: file.mime,
        };

        spawn_local(async move {
            let api = config::new_api();
            match api.generate_captions(media, &options).await {
                Ok(generated) => set_captions.set(generated.captions),
                Err(ApiError::QuotaExceeded) => set_quota_exhausted.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let text = captions.get_untracked();
                let promise = window.navigator().clipboard().write_text(&text);
                spawn_local(async move {
                    match wasm_bindgen_futures::JsFuture::from(promise).await {
                        Ok(_) => set_copied.set(true),
                        Err(e) => web_sys::console::warn_1(
                            &format!("Failed to copy captions: {e:?}").into(),
                        ),
                    }
                });
            }
        }
    };

    view! {
        <section class="py-12 px-4">
            <div class="container mx-auto max-w-3xl">
                <h1 class="text-4xl font-bold mb-2 text-center">"Create Captions for Your Content"</h1>
                <p class="text-center text-base-content/70 mb-10">
                    "Upload your video or image, customize your tone, and get captions instantly."
                </p>

                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <form on:submit=on_submit class="space-y-6">
                            <Show when=move || error.get().is_some()>
                                <Alert variant=AlertVariant::Error>
                                    <span>{move || error.get().unwrap_or_default()}</span>
                                </Alert>
                            </Show>

                            <Show when=move || quota_exhausted.get()>
                                <Alert variant=AlertVariant::Warning>
                                    <span>
                                        "You have reached your caption limit for this period. "
                                        <a href="/pricing" class="link font-semibold">"Upgrade your plan"</a>
                                        " to keep generating."
                                    </span>
                                </Alert>
                            </Show>

                            <div class="flex items-center justify-between">
                                <span class="label-text font-medium">"File type"</span>
                                <label class="flex items-center gap-2 cursor-pointer">
                                    <span class="label-text">"Image"</span>
                                    <input
                                        type="checkbox"
                                        class="toggle toggle-primary"
                                        prop:checked=move || is_video.get()
                                        on:change=on_toggle
                                    />
                                    <span class="label-text">"Video"</span>
                                </label>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">
                                        {move || if is_video.get() { "Upload a video" } else { "Upload an image" }}
                                    </span>
                                </label>
                                <input
                                    type="file"
                                    class="file-input file-input-bordered w-full"
                                    accept=move || if is_video.get() { "video/*" } else { "image/*" }
                                    on:change=on_file_change
                                />
                            </div>

                            <Show when=move || preview_url.get().is_some()>
                                <div class="rounded-lg overflow-hidden bg-base-200 flex justify-center">
                                    {move || {
                                        let url = preview_url.get().unwrap_or_default();
                                        if is_video.get() {
                                            view! { <video controls class="max-h-64" src=url></video> }.into_any()
                                        } else {
                                            view! { <img class="max-h-64 object-contain" src=url alt="Upload preview"/> }.into_any()
                                        }
                                    }}
                                </div>
                            </Show>

                            <div class="grid md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"Tone"</span>
                                    </label>
                                    <select
                                        class="select select-bordered capitalize"
                                        prop:value=move || tone.get()
                                        on:change=move |ev| set_tone.set(event_target_value(&ev))
                                    >
                                        {CaptionTone::ALL
                                            .iter()
                                            .map(|t| view! { <option class="capitalize" value=t.as_str()>{t.as_str()}</option> })
                                            .collect_view()}
                                    </select>
                                </div>

                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"Caption length"</span>
                                    </label>
                                    <select
                                        class="select select-bordered capitalize"
                                        prop:value=move || length.get()
                                        on:change=move |ev| set_length.set(event_target_value(&ev))
                                    >
                                        {CaptionLength::ALL
                                            .iter()
                                            .map(|l| view! { <option class="capitalize" value=l.as_str()>{l.as_str()}</option> })
                                            .collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Hashtags"</span>
                                    <span class="label-text-alt">{move || hashtags.get().to_string()}</span>
                                </label>
                                <input
                                    type="range"
                                    min="0"
                                    max="10"
                                    class="range range-primary"
                                    prop:value=move || hashtags.get().to_string()
                                    on:input=move |ev| {
                                        set_hashtags.set(
                                            event_target_value(&ev).parse().unwrap_or(DEFAULT_HASHTAG_COUNT),
                                        )
                                    }
                                />
                            </div>

                            <button
                                type="submit"
                                class="btn btn-primary w-full"
                                disabled=move || loading.get() || selected.with(|s| s.is_none())
                            >
                                <Show when=move || loading.get() fallback=|| "Generate captions">
                                    <span class="loading loading-spinner loading-sm"></span>
                                    "Generating..."
                                </Show>
                            </button>
                        </form>

                        <Show when=move || !captions.get().is_empty()>
                            <div class="mt-6 space-y-3">
                                <div class="flex items-center justify-between">
                                    <h2 class="text-lg font-semibold">"Your captions"</h2>
                                    <div class="flex items-center gap-2">
                                        <Show when=move || copied.get()>
                                            <span class="badge badge-success badge-sm">"Copied"</span>
                                        </Show>
                                        <Button
                                            variant=ButtonVariant::Outline
                                            class="btn-sm"
                                            on_click=Callback::new(on_copy)
                                        >
                                            "Copy"
                                        </Button>
                                    </div>
                                </div>
                                <pre class="whitespace-pre-wrap bg-base-200 rounded-lg p-4 text-sm">
                                    {move || captions.get()}
                                </pre>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
