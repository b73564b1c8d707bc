//! Tracker Dashboard App
//!
//! Navigation between the players and saves pages, the startup API status
//! check and the alert overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_alerts::{AlertContainer, Notifier};

use crate::components::{PlayersPage, SavesPage};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Players,
    Saves,
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    let notifier = Notifier::new();
    let ctx = AppContext::new(&config, notifier.clone());
    provide_context(ctx);

    let (page, set_page) = signal(Page::Players);

    // Check API status once on mount
    let api = ctx.api();
    spawn_local(async move {
        let online = api.is_online().await;
        ctx.set_api_online(online);
    });

    let nav_class = move |target: Page| move || if page.get() == target { "nav-link active" } else { "nav-link" };

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-dark mb-4">
            <div class="container">
                <span class="navbar-brand">"Pokemon Player State Tracker"</span>
                <ul class="navbar-nav me-auto">
                    <li class="nav-item">
                        <a class=nav_class(Page::Players) href="#" on:click=move |ev| {
                            ev.prevent_default();
                            set_page.set(Page::Players);
                        }>"Players"</a>
                    </li>
                    <li class="nav-item">
                        <a class=nav_class(Page::Saves) href="#" on:click=move |ev| {
                            ev.prevent_default();
                            set_page.set(Page::Saves);
                        }>"Save Files"</a>
                    </li>
                </ul>
                <span class="navbar-text">
                    {move || match ctx.api_online.get() {
                        None => view! { <span class="badge bg-secondary">"Checking API..."</span> }.into_any(),
                        Some(true) => view! { <span class="badge bg-success">"API online"</span> }.into_any(),
                        Some(false) => view! { <span class="badge bg-danger">"API offline"</span> }.into_any(),
                    }}
                </span>
            </div>
        </nav>

        <main class="container">
            {move || match page.get() {
                Page::Players => view! { <PlayersPage /> }.into_any(),
                Page::Saves => view! { <SavesPage /> }.into_any(),
            }}
        </main>

        <AlertContainer notifier=notifier />
    }
}
