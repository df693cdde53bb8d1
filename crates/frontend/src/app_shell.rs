//! Application shell - root projection of the three session states
//!
//! Renders the visible page as a pure function of (CatalogStore,
//! NavState, GalleryState). Components emit transitions back to the
//! contexts on click; nothing here keeps its own copy of that state.

use crate::catalog::store::{CatalogState, CatalogStore};
use crate::gallery::Lightbox;
use crate::layout::footer::Footer;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::header::Header;
use crate::pages::category::CategoryPage;
use crate::pages::home::HomePage;
use crate::pages::item::ItemPage;
use crate::pages::status::{LoadErrorPage, LoadingPage};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = use_context::<CatalogStore>().expect("CatalogStore context not found");

    view! {
        <div class="app-layout" dir="rtl">
            <Header />

            <main class="app-main">
                {move || match store.state.get() {
                    CatalogState::Loading => view! { <LoadingPage /> }.into_any(),
                    CatalogState::Failed(message) => {
                        view! { <LoadErrorPage message=message /> }.into_any()
                    }
                    // Exhaustive over Page: adding a page variant is a
                    // compile-time-checked change.
                    CatalogState::Ready(_) => match ctx.nav.get().page {
                        Page::Home => view! { <HomePage /> }.into_any(),
                        Page::Category(category_id) => {
                            view! { <CategoryPage category_id=category_id /> }.into_any()
                        }
                        Page::Item(item) => view! { <ItemPage item=item /> }.into_any(),
                    },
                }}
            </main>

            <Footer />

            // Overlay viewer sits above whichever page is active
            <Lightbox />
        </div>
    }
}
