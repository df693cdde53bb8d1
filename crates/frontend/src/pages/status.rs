use crate::catalog::store::reload_page;
use leptos::prelude::*;

/// Shown while the one catalog fetch of the session is in flight. The fetch
/// has no timeout, so this page can stay up indefinitely.
#[component]
#[allow(non_snake_case)]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <div class="spinner"></div>
            <p>{"جاري تحميل البيانات..."}</p>
        </div>
    }
}

/// Full-page load failure. The only recovery is the manual reload button;
/// there is no automatic retry.
#[component]
#[allow(non_snake_case)]
pub fn LoadErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="status-page status-error">
            <h2>{"تعذر تحميل بيانات المتجر"}</h2>
            <p class="error-detail">{message}</p>
            <button class="btn btn-primary" on:click=move |_| reload_page()>
                {"إعادة المحاولة"}
            </button>
        </div>
    }
}
