//! Create Item Page
//!
//! Collects the three fields, validates non-emptiness, POSTs the item,
//! and returns to the list on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::components::ItemFields;
use crate::models::{ItemDraft, LoadStatus};
use crate::pages::mounted_flag;

#[component]
pub fn ItemCreatePage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let alive = mounted_flag();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (count, set_count) = signal(String::new());
    let (status, set_status) = signal(LoadStatus::Idle);

    let on_submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        let alive = alive.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_status.set(LoadStatus::Loading);

            let draft = ItemDraft::new(
                name.get_untracked(),
                price.get_untracked(),
                count.get_untracked(),
            );
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(msg) => {
                    set_status.set(LoadStatus::Failed(msg));
                    return;
                }
            };

            let api = api.clone();
            let navigate = navigate.clone();
            let alive = alive.clone();
            spawn_local(async move {
                match api.create_item(&payload).await {
                    Ok(()) => {
                        if alive.get() {
                            navigate("/", Default::default());
                        }
                    }
                    Err(msg) => {
                        if alive.get() {
                            set_status.set(LoadStatus::Failed(msg));
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="form-page">
            <form class="item-form" on:submit=on_submit>
                <h1>"Create New Item"</h1>

                {move || {
                    status.get().error().map(|msg| view! { <p class="form-error">{msg}</p> })
                }}

                <ItemFields
                    name=name
                    set_name=set_name
                    price=price
                    set_price=set_price
                    count=count
                    set_count=set_count
                />

                <button type="submit" class="submit-btn" disabled=move || status.get().is_loading()>
                    {move || if status.get().is_loading() { "Creating..." } else { "Create Item" }}
                </button>
            </form>
        </div>
    }
}
