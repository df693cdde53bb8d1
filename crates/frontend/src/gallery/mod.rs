pub mod state;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;
use state::{Direction, GalleryState};

/// Reactive wrapper around [`GalleryState`], provided via context.
///
/// The active image list is read from the navigation context at event time:
/// the overlay never keeps its own copy of the selected item's images.
#[derive(Clone, Copy)]
pub struct GalleryService {
    pub state: RwSignal<GalleryState>,
}

impl GalleryService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(GalleryState::new()),
        }
    }

    pub fn open(&self, url: &str) {
        let url = url.to_string();
        self.state.update(|s| s.open(&url));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn step(&self, images: &[String], direction: Direction) {
        let images = images.to_vec();
        self.state.update(|s| s.step(&images, direction));
    }
}

/// Image list the overlay navigates within: the selected item's images, or
/// the singleton of the open image when no item context exists.
fn active_images(ctx: &AppGlobalContext, current: &str) -> Vec<String> {
    match &ctx.nav.get_untracked().page {
        Page::Item(item) => item.images.clone(),
        _ => vec![current.to_string()],
    }
}

/// Full-screen overlay viewer rendered above any page while an image is open.
#[component]
#[allow(non_snake_case)]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let gallery = use_context::<GalleryService>().expect("GalleryService context not found");

    let step = move |direction: Direction| {
        if let Some(current) = gallery.state.get_untracked().fullscreen {
            let images = active_images(&ctx, &current);
            gallery.step(&images, direction);
        }
    };

    view! {
        {move || gallery.state.get().fullscreen.map(|url| view! {
            <div class="lightbox-overlay" on:click=move |_| gallery.close()>
                <button
                    class="lightbox-close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.close();
                    }
                >
                    {icon("close")}
                </button>
                <button
                    class="lightbox-nav lightbox-prev"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step(Direction::Previous);
                    }
                >
                    {icon("chevron-right")}
                </button>
                <img
                    class="lightbox-image"
                    src=url.clone()
                    on:click=move |ev| ev.stop_propagation()
                />
                <button
                    class="lightbox-nav lightbox-next"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step(Direction::Next);
                    }
                >
                    {icon("chevron-left")}
                </button>
            </div>
        })}
    }
}
