use crate::catalog::store::{CatalogState, CatalogStore};
use crate::layout::global_context::AppGlobalContext;
use crate::pages::item_card::ItemCard;
use crate::shared::icons::icon;
use contracts::{Category, Item};
use leptos::prelude::*;

/// Interval between automatic carousel advances, in milliseconds.
const CAROUSEL_INTERVAL_MS: u32 = 5000;

#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = use_context::<CatalogStore>().expect("CatalogStore context not found");

    let featured = move || -> Vec<Item> {
        match store.state.get() {
            CatalogState::Ready(doc) => doc.featured_items().into_iter().cloned().collect(),
            _ => Vec::new(),
        }
    };

    let categories = move || -> Vec<Category> {
        match store.state.get() {
            CatalogState::Ready(doc) => doc.categories.clone(),
            _ => Vec::new(),
        }
    };

    // Monotonic slide counter; the displayed index is `slide % len`, so the
    // carousel is circular without bookkeeping on list changes.
    let (slide, set_slide) = signal(0usize);

    // Auto-advance. The loop ends when the signal is disposed together with
    // the page.
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(CAROUSEL_INTERVAL_MS).await;
            if set_slide.try_update(|i| *i += 1).is_none() {
                break;
            }
        }
    });

    let next_slide = move |_| set_slide.update(|i| *i += 1);
    let prev_slide = move |_| {
        let n = featured().len();
        if n > 0 {
            set_slide.update(|i| *i = (*i + n - 1) % n);
        }
    };

    let current_featured = move || -> Option<Item> {
        let list = featured();
        if list.is_empty() {
            None
        } else {
            Some(list[slide.get() % list.len()].clone())
        }
    };

    view! {
        <section class="hero">
            <h2>{"أهلاً بكم في معرضنا"}</h2>
            <p>{"تصفحوا أحدث تشكيلاتنا واطلبوا عبر واتساب أو الهاتف"}</p>
        </section>

        {move || current_featured().map(|item| view! {
            <section class="featured">
                <h2>{"منتجات مميزة"}</h2>
                <div class="carousel">
                    <button class="carousel-nav" on:click=prev_slide>
                        {icon("chevron-right")}
                    </button>
                    <ItemCard item=item />
                    <button class="carousel-nav" on:click=next_slide>
                        {icon("chevron-left")}
                    </button>
                </div>
            </section>
        })}

        <section class="categories">
            <h2>{"تصفح الفئات"}</h2>
            <div class="category-grid">
                {move || categories().into_iter().map(|category| {
                    let id = category.id.clone();
                    view! {
                        <div class="category-card" on:click=move |_| ctx.open_category(&id)>
                            <span class="category-icon">{category.icon.clone()}</span>
                            <h3>{category.name.clone()}</h3>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
