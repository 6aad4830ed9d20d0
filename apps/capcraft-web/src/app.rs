use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar};
use crate::pages::{
    account::AccountPage, contact::ContactPage, generator::GeneratorPage, landing::LandingPage,
    login::LoginPage, not_found::NotFoundPage, payment::PaymentPage, pricing::PricingPage,
    signup::SignupPage,
};
use crate::state::auth::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Meta name="description" content="CaptionCraft - AI-powered captions for your images and videos"/>

        <Title text="CaptionCraft"/>

        <AuthProvider>
            <Router>
                <div class="min-h-screen flex flex-col bg-base-200">
                    <Navbar/>
                    <main class="flex-1">
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=path!("/") view=LandingPage/>
                            <Route path=path!("/pricing") view=PricingPage/>
                            <Route path=path!("/payment") view=PaymentPage/>
                            <Route path=path!("/login") view=LoginPage/>
                            <Route path=path!("/signup") view=SignupPage/>
                            <Route path=path!("/generator") view=GeneratorPage/>
                            <Route path=path!("/account") view=AccountPage/>
                            <Route path=path!("/contact") view=ContactPage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </Router>
        </AuthProvider>
    }
}
