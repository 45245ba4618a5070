use daytrader_app::ports::SystemClock;
use daytrader_app::services::login_service::LoginService;
use daytrader_domain::message;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpGateway;
use crate::browser::{self, CookieSessionStore, LocationNavigator};
use crate::config;

/// Login page: a single username field.
///
/// A successful login stores the session cookie and replaces the page with
/// the actions page; any failure raises a blocking alert.
#[component]
pub fn Login() -> impl IntoView {
    let (username, set_username) = signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked();
        spawn_local(async move {
            let service = LoginService::new(
                HttpGateway::new(config::api_base()),
                CookieSessionStore,
                LocationNavigator,
                SystemClock,
            );
            if let Err(err) = service.login(&name).await {
                leptos::logging::warn!("login failed: {err}");
                browser::alert(message::LOGIN_FAILURE);
            }
        });
    };

    view! {
        <div class="login">
            <h1>"Day Trading"</h1>
            <form on:submit=submit>
                <label for="userName">"Username"</label>
                <input
                    id="userName"
                    type="text"
                    autocomplete="username"
                    prop:value=username
                    on:click=move |_| set_username.set(String::new())
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <button type="submit">"Login"</button>
            </form>
        </div>
    }
}
