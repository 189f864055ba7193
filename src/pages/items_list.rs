//! Items List Page
//!
//! Loads the full collection on mount; per-item delete goes through a
//! confirmation dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::use_api;
use crate::components::{DeleteConfirmDialog, ItemCard};
use crate::models::{remove_item, Item};
use crate::pages::mounted_flag;

#[component]
pub fn ItemsListPage() -> impl IntoView {
    let api = use_api();
    let alive = mounted_flag();

    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);
    // Pending delete target; Some(..) keeps the dialog open
    let (delete_item_id, set_delete_item_id) = signal::<Option<u32>>(None);

    // Fetch all items on mount
    Effect::new({
        let api = api.clone();
        let alive = alive.clone();
        move |_| {
            let api = api.clone();
            let alive = alive.clone();
            spawn_local(async move {
                match api.list_items().await {
                    Ok(loaded) => {
                        if !alive.get() {
                            return;
                        }
                        set_items.set(loaded);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[LIST] Error fetching items: {}", e).into(),
                        );
                    }
                }
                if alive.get() {
                    set_loading.set(false);
                }
            });
        }
    });

    // Confirmed delete: issue the request, patch local state on success.
    // A failure is logged only; either way the dialog closes.
    let confirm_delete = {
        let api = api.clone();
        let alive = alive.clone();
        move |_: ()| {
            let Some(id) = delete_item_id.get_untracked() else {
                return;
            };
            let api = api.clone();
            let alive = alive.clone();
            spawn_local(async move {
                match api.delete_item(id).await {
                    Ok(()) => {
                        if !alive.get() {
                            return;
                        }
                        set_items.update(|items| remove_item(items, id));
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[LIST] Failed to delete item {}: {}", id, e).into(),
                        );
                    }
                }
                if alive.get() {
                    set_delete_item_id.set(None);
                }
            });
        }
    };

    view! {
        <div class="list-page">
            <div class="list-header">
                <h1>"Items List"</h1>
                <A href="/create" attr:class="create-link">
                    "Create New Item"
                </A>
            </div>

            <p class="list-intro">"Manage your items easily."</p>

            <Show when=move || loading.get()>
                <p class="list-loading">"Loading items..."</p>
            </Show>

            <div class="item-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        view! {
                            <ItemCard
                                item=item
                                on_delete=move |id: u32| set_delete_item_id.set(Some(id))
                            />
                        }
                    }
                />
            </div>

            <Show when=move || !loading.get() && items.get().is_empty()>
                <p class="list-empty">"No items available"</p>
            </Show>

            <Show when=move || delete_item_id.get().is_some()>
                <DeleteConfirmDialog
                    on_confirm=confirm_delete.clone()
                    on_cancel=move |_: ()| set_delete_item_id.set(None)
                />
            </Show>
        </div>
    }
}
