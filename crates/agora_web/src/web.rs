//! App shell: console logging, router, and page mounting.

mod confirm;
mod http;
mod landing;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use confirm::ConfirmPage;
use landing::LandingPage;

pub fn start() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found".into_view()>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/confirm/:token") view=ConfirmPage />
                </Routes>
            </main>
        </Router>
    }
}
