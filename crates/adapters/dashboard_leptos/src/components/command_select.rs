//! Drop-down listing every trading command.

use daytrader_app::services::actions::ActionsPage;
use daytrader_domain::command::Command;
use leptos::prelude::*;

/// Command picker; changing it clears the inputs and the results area.
#[component]
pub fn CommandSelect(page: RwSignal<ActionsPage>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        page.update(|p| {
            if let Err(err) = p.select_id(&id) {
                leptos::logging::warn!("{err}");
            }
        });
    };

    view! {
        <label for="commandSelect">"Command"</label>
        <select id="commandSelect" on:change=on_change>
            {Command::ALL
                .into_iter()
                .map(|command| {
                    view! {
                        <option
                            value=command.as_str()
                            selected=move || page.with(|p| p.command() == command)
                        >
                            {command.as_str()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
