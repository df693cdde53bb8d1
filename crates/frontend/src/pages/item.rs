use crate::catalog::store::{CatalogState, CatalogStore};
use crate::gallery::GalleryService;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::contact_links::{
    item_inquiry_subject, item_inquiry_text, mailto_link, tel_link, whatsapp_link,
};
use crate::shared::icons::icon;
use contracts::{ContactInfo, Item};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ItemPage(item: Item) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = use_context::<CatalogStore>().expect("CatalogStore context not found");
    let gallery = use_context::<GalleryService>().expect("GalleryService context not found");

    // Which of the item's images is shown inline. The detail page assumes
    // images[0] exists for any item reachable from navigation.
    let (main_index, set_main_index) = signal(0usize);

    let images = item.images.clone();
    let main_image = {
        let images = images.clone();
        move || {
            images
                .get(main_index.get())
                .or_else(|| images.first())
                .cloned()
                .unwrap_or_default()
        }
    };

    // Breadcrumb category is derived from the item itself.
    let category_id = item.category.clone();
    let category_label = {
        let category_id = category_id.clone();
        move || match store.state.get() {
            CatalogState::Ready(doc) => doc
                .category_by_id(&category_id)
                .map(|c| c.name.clone()),
            _ => None,
        }
    };

    let contact = move || -> Option<ContactInfo> {
        match store.state.get() {
            CatalogState::Ready(doc) => Some(doc.contact_info.clone()),
            _ => None,
        }
    };

    let open_fullscreen = {
        let main_image = main_image.clone();
        move |_| gallery.open(&main_image())
    };

    let title = item.title.clone();
    let title_for_contacts = item.title.clone();

    view! {
        <section class="item-page">
            <nav class="breadcrumb">
                <button class="crumb" on:click=move |_| ctx.go_home()>{"الرئيسية"}</button>
                {move || category_label().map(|name| {
                    let id = category_id.clone();
                    view! {
                        <span class="crumb-sep">{"/"}</span>
                        <button class="crumb" on:click=move |_| ctx.open_category(&id)>
                            {name}
                        </button>
                    }
                })}
                <span class="crumb-sep">{"/"}</span>
                <span class="crumb-current">{title.clone()}</span>
            </nav>

            <div class="item-layout">
                <div class="item-gallery">
                    <img
                        class="item-main-image"
                        src=main_image.clone()
                        alt=title.clone()
                        on:click=open_fullscreen
                    />
                    {(images.len() > 1).then(|| view! {
                        <div class="thumbnail-strip">
                            {images.iter().enumerate().map(|(i, url)| {
                                let url = url.clone();
                                view! {
                                    <img
                                        class="thumbnail"
                                        class:active=move || main_index.get() == i
                                        src=url
                                        on:click=move |_| set_main_index.set(i)
                                    />
                                }
                            }).collect_view()}
                        </div>
                    })}
                </div>

                <div class="item-info">
                    <h2>{title.clone()}</h2>
                    {item.price.clone().map(|p| view! {
                        <p class="item-price">{"السعر: "}{p}</p>
                    })}
                    <p class="item-description">{item.description.clone()}</p>

                    {move || contact().map(|info| {
                        let title = title_for_contacts.clone();
                        view! {
                            <div class="contact-actions">
                                <a class="btn btn-primary" href=tel_link(&info.phone)>
                                    {icon("phone")}
                                    {"اتصال"}
                                </a>
                                <a
                                    class="btn btn-success"
                                    href=whatsapp_link(&info.whatsapp, Some(&item_inquiry_text(&title)))
                                    target="_blank"
                                    rel="noopener"
                                >
                                    {icon("whatsapp")}
                                    {"واتساب"}
                                </a>
                                <a
                                    class="btn btn-secondary"
                                    href=mailto_link(&info.email, Some(&item_inquiry_subject(&title)))
                                >
                                    {icon("mail")}
                                    {"البريد الإلكتروني"}
                                </a>
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
