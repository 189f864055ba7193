//! Delete Confirmation Dialog
//!
//! Modal confirm/cancel step shown before an item is deleted.
//! Clicking the overlay counts as cancel.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-overlay" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <h2 class="dialog-title">"Confirm Deletion"</h2>
                <p class="dialog-text">
                    "This action cannot be undone. Are you sure you want to delete this item?"
                </p>
                <div class="dialog-actions">
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
