pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{DashboardPage, FrequencySettingsPage, LandingPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Naarad AI | Your feed, on WhatsApp"/>
        <Meta name="description" content="Hyper-personalized updates for sports, news, movies and YouTube, straight to your WhatsApp"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/alerts/:id/frequency") view=FrequencySettingsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
