use leptos::prelude::*;

/// Shown for any path other than the login and actions pages.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Nothing to trade here"</h1>
            <p>"This address is not part of the trading client."</p>
            <nav>
                <a href="/actions">"Open trading actions"</a>
                " | "
                <a href="/">"Log in as another user"</a>
            </nav>
        </section>
    }
}
