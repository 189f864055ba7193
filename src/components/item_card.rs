//! Item Card Component
//!
//! One card per item in the list view, with edit and delete actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Item;

/// Card showing a single item's fields
///
/// Delete only reports the id upward; the list page owns the
/// confirmation step.
#[component]
pub fn ItemCard(item: Item, #[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let id = item.id;

    view! {
        <div class="item-card">
            <div class="item-card-header">
                <h3 class="item-name">{item.name.clone()}</h3>
                <A href=format!("/edit/{}", id) attr:class="edit-link">
                    "Edit"
                </A>
            </div>

            <div class="item-card-body">
                <p>
                    <strong>"Price: "</strong>
                    {item.price}
                </p>
                <p>
                    <strong>"Count: "</strong>
                    {item.count}
                </p>
            </div>

            <div class="item-card-footer">
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
