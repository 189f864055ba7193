//! Items Frontend App
//!
//! Top-level router wiring the three pages and providing the API client.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::pages::{ItemCreatePage, ItemEditPage, ItemsListPage};

#[component]
pub fn App() -> impl IntoView {
    // Resolve the base URL once and inject the client app-wide
    let config = ApiConfig::resolve();
    provide_context(ApiClient::new(&config));

    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=ItemsListPage />
                    <Route path=path!("/create") view=ItemCreatePage />
                    <Route path=path!("/edit/:id") view=ItemEditPage />
                </Routes>
            </main>
        </Router>
    }
}
