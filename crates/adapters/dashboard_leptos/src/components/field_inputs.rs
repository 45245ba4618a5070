//! The (up to two) labelled text inputs of the selected command.

use daytrader_app::services::actions::ActionsPage;
use daytrader_domain::layout::{Layout, MAX_FIELDS};
use leptos::prelude::*;

/// Inputs shown for the current command's layout.
///
/// Slots past the layout's visible count are not rendered at all.
#[component]
pub fn FieldInputs(page: RwSignal<ActionsPage>) -> impl IntoView {
    // Only re-render the inputs when the layout itself changes, not on every
    // keystroke, so the focused input survives typing.
    let layout = Memo::new(move |_| page.with(ActionsPage::layout));

    (0..MAX_FIELDS)
        .map(|index| view! { <FieldInput page=page layout=layout index=index/> })
        .collect::<Vec<_>>()
}

#[component]
fn FieldInput(page: RwSignal<ActionsPage>, layout: Memo<Layout>, index: usize) -> impl IntoView {
    move || {
        layout.get().field(index).map(|field| {
            let id = format!("field{index}");
            view! {
                <div class="field">
                    <label for=id.clone()>{field.label}</label>
                    <input
                        id=id
                        type="text"
                        name=field.role.key()
                        prop:value=move || page.with(|p| p.input(index).to_string())
                        on:input=move |ev| page.update(|p| p.set_input(index, event_target_value(&ev)))
                    />
                </div>
            }
        })
    }
}
