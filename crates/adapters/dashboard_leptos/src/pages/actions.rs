use daytrader_app::services::actions::{ActionsPage, ActionsService};
use daytrader_app::services::session_guard::SessionGuard;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpGateway;
use crate::browser::{CookieSessionStore, LocationNavigator};
use crate::components::{CommandSelect, FieldInputs, ResultsArea};
use crate::config;

/// Trading actions page.
///
/// Renders nothing and bounces to the login page when no session cookie is
/// present. Each submission runs independently; results are applied in the
/// order responses arrive.
#[component]
pub fn Actions() -> impl IntoView {
    let Some(session) = SessionGuard::new(CookieSessionStore, LocationNavigator).check() else {
        return ().into_any();
    };

    let page = RwSignal::new(ActionsPage::new(session));
    let username = page.with_untracked(|p| p.username().to_string());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = page.with_untracked(ActionsPage::pending_request);
        spawn_local(async move {
            let service = ActionsService::new(HttpGateway::new(config::api_base()));
            let outcome = service.submit(&request).await;
            page.update(|p| p.apply_outcome(&request, &outcome));
        });
    };

    view! {
        <div class="actions">
            <header>
                <span>"Logged in as "</span>
                <strong id="usernameText">{username}</strong>
            </header>
            <form on:submit=submit>
                <CommandSelect page=page/>
                <FieldInputs page=page/>
                <button type="submit">"Submit"</button>
            </form>
            <ResultsArea page=page/>
        </div>
    }
    .into_any()
}
