use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card bg-base-100 shadow-md {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardBody(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card-body {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <h2 class=format!("card-title {}", class)>
            {children()}
        </h2>
    }
}
