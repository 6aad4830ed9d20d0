use leptos::ev;
use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Outline,
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: Signal<bool>,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Ghost => "btn btn-ghost",
        ButtonVariant::Outline => "btn btn-outline",
    };

    view! {
        <button
            class=format!("{} {}", variant_class, class)
            disabled=move || disabled.get()
            on:click=move |e| {
                if let Some(handler) = on_click {
                    handler.run(e);
                }
            }
        >
            {children()}
        </button>
    }
}
