use crate::layout::global_context::AppGlobalContext;
use contracts::Item;
use leptos::prelude::*;

/// Card used in the featured carousel and in category grids. Clicking it
/// opens the item detail page.
#[component]
#[allow(non_snake_case)]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let cover = item.images.first().cloned().unwrap_or_default();
    let title = item.title.clone();
    let price = item.price.clone();
    let open = {
        let item = item.clone();
        move |_| ctx.open_item(item.clone())
    };

    view! {
        <div class="item-card" on:click=open>
            <img class="item-card-image" src=cover alt=title.clone() />
            <div class="item-card-body">
                <h3>{title}</h3>
                {price.map(|p| view! { <span class="item-card-price">{p}</span> })}
            </div>
        </div>
    }
}
