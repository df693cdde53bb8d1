use crate::app_shell::AppShell;
use crate::catalog::store::CatalogStore;
use crate::gallery::GalleryService;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation context to the whole app.
    provide_context(AppGlobalContext::new());

    // Provide GalleryService for the full-screen image overlay
    provide_context(GalleryService::new());

    // Catalog store starts loading immediately; the single fetch of the
    // session happens here.
    let store = CatalogStore::new();
    store.load();
    provide_context(store);

    view! {
        <AppShell />
    }
}
