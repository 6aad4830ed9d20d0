use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[component]
pub fn Spinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    let size_class = match size {
        SpinnerSize::Sm => "loading-sm",
        SpinnerSize::Md => "loading-md",
        SpinnerSize::Lg => "loading-lg",
    };

    view! {
        <span class=format!("loading loading-spinner {}", size_class)></span>
    }
}
