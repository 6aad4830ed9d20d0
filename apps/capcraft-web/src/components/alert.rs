use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        AlertVariant::Info => "alert alert-info",
        AlertVariant::Success => "alert alert-success",
        AlertVariant::Warning => "alert alert-warning",
        AlertVariant::Error => "alert alert-error",
    };

    view! {
        <div class=format!("{} text-sm {}", variant_class, class)>
            {children()}
        </div>
    }
}
