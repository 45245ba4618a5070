use daytrader_app::services::actions::ActionsPage;
use leptos::prelude::*;

/// Message line for the latest server response.
#[component]
pub fn ResultsArea(page: RwSignal<ActionsPage>) -> impl IntoView {
    view! {
        <p id="results" class="results" aria-live="polite">
            {move || page.with(|p| p.results().to_string())}
        </p>
    }
}
