use leptos::prelude::*;

use crate::ui_model::Page;

/// Static landing page. Activation emails link straight to `/confirm/:token`;
/// successful confirmations land back here.
#[component]
pub(super) fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing">
            <h1>{Page::Landing.title()}</h1>
            <p>"Discussions, threads, and the people who write them."</p>
        </section>
    }
}
