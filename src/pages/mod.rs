//! Routed Pages
//!
//! One module per navigable view.

mod item_create;
mod item_edit;
mod items_list;

pub use item_create::ItemCreatePage;
pub use item_edit::ItemEditPage;
pub use items_list::ItemsListPage;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

/// True while the view that created it is still mounted.
///
/// Async handlers check it after every await so a response that resolves
/// after unmount is discarded instead of written into disposed state.
#[derive(Clone)]
pub(crate) struct MountedFlag(Arc<AtomicBool>);

impl MountedFlag {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Create a flag for the current view, cleared on cleanup
pub(crate) fn mounted_flag() -> MountedFlag {
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });
    MountedFlag(alive)
}
