use crate::catalog::store::{CatalogState, CatalogStore};
use crate::pages::item_card::ItemCard;
use contracts::Item;
use leptos::prelude::*;

/// Label shown when the selected category id has no entry in the catalog.
/// A dangling id degrades the heading, it never fails the page.
const UNKNOWN_CATEGORY: &str = "فئة غير معروفة";

#[component]
#[allow(non_snake_case)]
pub fn CategoryPage(category_id: String) -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore context not found");

    let heading = {
        let category_id = category_id.clone();
        move || match store.state.get() {
            CatalogState::Ready(doc) => doc
                .category_by_id(&category_id)
                .map(|c| format!("{} {}", c.icon, c.name))
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            _ => String::new(),
        }
    };

    let items = move || -> Vec<Item> {
        match store.state.get() {
            CatalogState::Ready(doc) => doc
                .items_in_category(&category_id)
                .into_iter()
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    };

    view! {
        <section class="category-page">
            <h2>{heading}</h2>
            {move || {
                let list = items();
                if list.is_empty() {
                    view! {
                        <p class="empty-category">{"لا توجد منتجات في هذه الفئة حالياً"}</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="item-grid">
                            {list.into_iter().map(|item| view! {
                                <ItemCard item=item />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
