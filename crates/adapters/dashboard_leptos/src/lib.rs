use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod browser;
mod components;
pub mod config;
mod pages;

use pages::{Actions, Login, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Login/>
                    <Route path=path!("actions") view=Actions/>
                </Routes>
            </main>
        </Router>
    }
}
