//! Edit Item Page
//!
//! Loads one item by the id in the route, pre-fills the fields, and PUTs
//! the replacement on submit. The fetch and the submit each carry their
//! own status so neither can clobber the other's indicator.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{use_api, FETCH_ITEM_FAILED};
use crate::components::ItemFields;
use crate::models::{ItemDraft, LoadStatus};
use crate::pages::mounted_flag;

#[component]
pub fn ItemEditPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let params = use_params_map();
    let alive = mounted_flag();

    let item_id = Memo::new(move |_| {
        params.read().get("id").and_then(|raw| raw.parse::<u32>().ok())
    });

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (count, set_count) = signal(String::new());
    let (fetch_status, set_fetch_status) = signal(LoadStatus::Loading);
    let (save_status, set_save_status) = signal(LoadStatus::Idle);

    // Fetch the item on mount and whenever the route id changes
    Effect::new({
        let api = api.clone();
        let alive = alive.clone();
        move |_| {
            let Some(id) = item_id.get() else {
                set_fetch_status.set(LoadStatus::Failed(FETCH_ITEM_FAILED.to_string()));
                return;
            };
            set_fetch_status.set(LoadStatus::Loading);
            let api = api.clone();
            let alive = alive.clone();
            spawn_local(async move {
                match api.get_item(id).await {
                    Ok(item) => {
                        if !alive.get() {
                            return;
                        }
                        set_name.set(item.name);
                        set_price.set(item.price.to_string());
                        set_count.set(item.count.to_string());
                        set_fetch_status.set(LoadStatus::Loaded);
                    }
                    Err(msg) => {
                        if alive.get() {
                            set_fetch_status.set(LoadStatus::Failed(msg));
                        }
                    }
                }
            });
        }
    });

    let on_submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        let alive = alive.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let Some(id) = item_id.get_untracked() else {
                return;
            };
            set_save_status.set(LoadStatus::Loading);

            let draft = ItemDraft::new(
                name.get_untracked(),
                price.get_untracked(),
                count.get_untracked(),
            );
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(msg) => {
                    set_save_status.set(LoadStatus::Failed(msg));
                    return;
                }
            };

            let api = api.clone();
            let navigate = navigate.clone();
            let alive = alive.clone();
            spawn_local(async move {
                match api.update_item(id, &payload).await {
                    Ok(()) => {
                        if alive.get() {
                            navigate("/", Default::default());
                        }
                    }
                    Err(msg) => {
                        if alive.get() {
                            set_save_status.set(LoadStatus::Failed(msg));
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="form-page">
            <form class="item-form" on:submit=on_submit>
                <h1>"Edit Item"</h1>

                <Show when=move || fetch_status.get().is_loading()>
                    <p class="form-loading">"Loading..."</p>
                </Show>

                {move || {
                    fetch_status
                        .get()
                        .error()
                        .or_else(|| save_status.get().error())
                        .map(|msg| view! { <p class="form-error">{msg}</p> })
                }}

                <ItemFields
                    name=name
                    set_name=set_name
                    price=price
                    set_price=set_price
                    count=count
                    set_count=set_count
                />

                <button type="submit" class="submit-btn" disabled=move || save_status.get().is_loading()>
                    {move || if save_status.get().is_loading() { "Updating..." } else { "Update Item" }}
                </button>
            </form>
        </div>
    }
}
