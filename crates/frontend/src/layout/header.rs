use crate::catalog::store::{CatalogState, CatalogStore};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::Category;
use leptos::prelude::*;

pub const STORE_NAME: &str = "معرض البيت الحديث";

#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = use_context::<CatalogStore>().expect("CatalogStore context not found");

    // Category nav is empty until the catalog is ready; the header itself is
    // rendered in every load state.
    let categories = move || -> Vec<Category> {
        match store.state.get() {
            CatalogState::Ready(doc) => doc.categories.clone(),
            _ => Vec::new(),
        }
    };

    let menu_open = move || ctx.nav.get().mobile_menu_open;

    view! {
        <header class="site-header">
            <div class="brand" on:click=move |_| ctx.go_home()>
                <h1>{STORE_NAME}</h1>
            </div>

            <nav class="desktop-nav">
                {move || categories().into_iter().map(|category| {
                    let id = category.id.clone();
                    view! {
                        <button class="nav-link" on:click=move |_| ctx.open_category(&id)>
                            <span class="nav-icon">{category.icon.clone()}</span>
                            {category.name.clone()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <button
                class="menu-toggle"
                on:click=move |_| ctx.toggle_mobile_menu()
            >
                {move || if menu_open() { icon("close") } else { icon("menu") }}
            </button>
        </header>

        <Show when=menu_open>
            <nav class="mobile-menu">
                <button class="nav-link" on:click=move |_| ctx.go_home()>
                    {"الرئيسية"}
                </button>
                {move || categories().into_iter().map(|category| {
                    let id = category.id.clone();
                    view! {
                        // open_category closes the menu
                        <button class="nav-link" on:click=move |_| ctx.open_category(&id)>
                            <span class="nav-icon">{category.icon.clone()}</span>
                            {category.name.clone()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </Show>
    }
}
