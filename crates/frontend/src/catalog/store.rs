use crate::catalog::api::fetch_catalog;
use contracts::CatalogDocument;
use leptos::prelude::*;

/// Lifecycle of the one catalog fetch of the session.
///
/// `Loading` -> `Ready` on success, `Loading` -> `Failed` on network or
/// decode error. There is no partial retry and no backoff: the only way out
/// of `Failed` is a full page reload, which restarts the fetch from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(CatalogDocument),
    Failed(String),
}

/// Reactive holder of the catalog document, provided via context.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub state: RwSignal<CatalogState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CatalogState::Loading),
        }
    }

    /// Kick off the single asynchronous fetch.
    pub fn load(&self) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_catalog().await {
                Ok(doc) => {
                    leptos::logging::log!(
                        "catalog loaded: {} categories, {} items",
                        doc.categories.len(),
                        doc.items.len()
                    );
                    state.set(CatalogState::Ready(doc));
                }
                Err(e) => {
                    log::error!("catalog load failed: {}", e);
                    state.set(CatalogState::Failed(e));
                }
            }
        });
    }
}

/// Full page reload, the only recovery path from a failed load.
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
