//! Pure full-screen gallery state.
//!
//! Tracks which single image, if any, is shown in the overlay viewer and
//! computes circular next/previous within an image list. Kept free of any
//! reactive or DOM types so the transitions are unit-testable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    /// URL of the image currently shown full screen, if any.
    pub fullscreen: Option<String>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, url: &str) {
        self.fullscreen = Some(url.to_string());
    }

    pub fn close(&mut self) {
        self.fullscreen = None;
    }

    /// Step within `images`, wrapping at both ends.
    ///
    /// When no item context exists the active list is the singleton of the
    /// current image, so stepping is a no-op; an empty list behaves the same
    /// way. When the current URL is not found in the list (stale reference
    /// after navigating away) it is treated as index 0.
    pub fn step(&mut self, images: &[String], direction: Direction) {
        let Some(current) = self.fullscreen.as_deref() else {
            return;
        };
        if images.len() < 2 {
            return;
        }
        let n = images.len();
        let i = images.iter().position(|url| url == current).unwrap_or(0);
        let target = match direction {
            Direction::Next => (i + 1) % n,
            Direction::Previous => (i + n - 1) % n,
        };
        self.fullscreen = Some(images[target].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_open_and_close() {
        let mut gallery = GalleryState::new();
        assert_eq!(gallery.fullscreen, None);
        gallery.open("a.jpg");
        assert_eq!(gallery.fullscreen.as_deref(), Some("a.jpg"));
        gallery.close();
        assert_eq!(gallery.fullscreen, None);
    }

    #[test]
    fn test_next_wraps_around() {
        let list = images(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut gallery = GalleryState::new();
        gallery.open("a.jpg");

        gallery.step(&list, Direction::Next);
        assert_eq!(gallery.fullscreen.as_deref(), Some("b.jpg"));
        gallery.step(&list, Direction::Next);
        assert_eq!(gallery.fullscreen.as_deref(), Some("c.jpg"));
        gallery.step(&list, Direction::Next);
        assert_eq!(gallery.fullscreen.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_previous_wraps_around() {
        let list = images(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut gallery = GalleryState::new();
        gallery.open("a.jpg");

        gallery.step(&list, Direction::Previous);
        assert_eq!(gallery.fullscreen.as_deref(), Some("c.jpg"));
    }

    #[test]
    fn test_next_then_previous_restores() {
        let list = images(&["a.jpg", "b.jpg"]);
        let mut gallery = GalleryState::new();
        gallery.open("b.jpg");

        gallery.step(&list, Direction::Next);
        gallery.step(&list, Direction::Previous);
        assert_eq!(gallery.fullscreen.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn test_singleton_and_empty_lists_are_noops() {
        let mut gallery = GalleryState::new();
        gallery.open("solo.jpg");

        gallery.step(&images(&["solo.jpg"]), Direction::Next);
        assert_eq!(gallery.fullscreen.as_deref(), Some("solo.jpg"));

        gallery.step(&[], Direction::Previous);
        assert_eq!(gallery.fullscreen.as_deref(), Some("solo.jpg"));
    }

    #[test]
    fn test_stale_url_falls_back_to_index_zero() {
        let list = images(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut gallery = GalleryState::new();
        gallery.open("gone.jpg");

        // treated as index 0, so next lands on index 1
        gallery.step(&list, Direction::Next);
        assert_eq!(gallery.fullscreen.as_deref(), Some("b.jpg"));

        gallery.open("gone.jpg");
        gallery.step(&list, Direction::Previous);
        assert_eq!(gallery.fullscreen.as_deref(), Some("c.jpg"));
    }

    #[test]
    fn test_step_without_open_image_is_noop() {
        let list = images(&["a.jpg", "b.jpg"]);
        let mut gallery = GalleryState::new();
        gallery.step(&list, Direction::Next);
        assert_eq!(gallery.fullscreen, None);
    }
}
