use crate::catalog::store::{CatalogState, CatalogStore};
use crate::shared::contact_links::{mailto_link, tel_link, whatsapp_link};
use crate::shared::icons::icon;
use contracts::ContactInfo;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Footer() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore context not found");

    let contact = move || -> Option<ContactInfo> {
        match store.state.get() {
            CatalogState::Ready(doc) => Some(doc.contact_info.clone()),
            _ => None,
        }
    };

    view! {
        <footer class="site-footer">
            {move || contact().map(|info| view! {
                <div class="contact-links">
                    <h3>{"تواصل معنا"}</h3>
                    <a class="contact-link" href=tel_link(&info.phone)>
                        {icon("phone")}
                        <span>{info.phone.clone()}</span>
                    </a>
                    <a class="contact-link" href=mailto_link(&info.email, None)>
                        {icon("mail")}
                        <span>{info.email.clone()}</span>
                    </a>
                    <a
                        class="contact-link"
                        href=whatsapp_link(&info.whatsapp, None)
                        target="_blank"
                        rel="noopener"
                    >
                        {icon("whatsapp")}
                        <span>{"واتساب"}</span>
                    </a>
                </div>
            })}
        </footer>
    }
}
