//! Item Form Fields Component
//!
//! The name/price/count inputs shared by the create and edit pages.

use leptos::prelude::*;

#[component]
pub fn ItemFields(
    name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    price: ReadSignal<String>,
    set_price: WriteSignal<String>,
    count: ReadSignal<String>,
    set_count: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for="name">"Item Name"</label>
            <input
                id="name"
                type="text"
                placeholder="Enter item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
        </div>

        <div class="form-field">
            <label for="price">"Price"</label>
            <input
                id="price"
                type="number"
                step="any"
                placeholder="Enter price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
        </div>

        <div class="form-field">
            <label for="count">"Count"</label>
            <input
                id="count"
                type="number"
                placeholder="Enter count"
                prop:value=move || count.get()
                on:input=move |ev| set_count.set(event_target_value(&ev))
            />
        </div>
    }
}
