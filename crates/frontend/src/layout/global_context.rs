use contracts::Item;
use leptos::prelude::*;
use serde::Serialize;

/// Active page of the session. Exhaustively matched in the shell, so adding
/// a page variant is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Page {
    Home,
    /// Category listing; carries the selected category id.
    Category(String),
    /// Item detail; carries the selected item by value. The breadcrumb
    /// category is derived from `item.category`, never tracked separately.
    Item(Item),
}

/// Navigation state: active page plus the orthogonal mobile-menu flag.
///
/// Plain data with pure transition methods so the whole state machine is
/// unit-testable without a DOM. The reactive wrapper lives in
/// [`AppGlobalContext`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavState {
    pub page: Page,
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            mobile_menu_open: false,
        }
    }

    /// Any state -> Home. Also closes the mobile menu.
    pub fn go_home(&mut self) {
        self.page = Page::Home;
        self.mobile_menu_open = false;
    }

    /// Any state -> Category. Closes the mobile menu: selecting a category
    /// from the menu navigates away from it.
    pub fn open_category(&mut self, category_id: &str) {
        self.page = Page::Category(category_id.to_string());
        self.mobile_menu_open = false;
    }

    /// Any state -> Item.
    pub fn open_item(&mut self, item: Item) {
        self.page = Page::Item(item);
        self.mobile_menu_open = false;
    }

    /// Flips the menu flag without touching the active page.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Category id of the item currently open on the detail page, if any.
    pub fn selected_item_category(&self) -> Option<&str> {
        match &self.page {
            Page::Item(item) => Some(item.category.as_str()),
            _ => None,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive navigation context provided to the whole app.
///
/// All transitions are synchronous signal updates; no transition is ever
/// rejected (presentational router, not a guarded workflow).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavState::new()),
        }
    }

    pub fn go_home(&self) {
        leptos::logging::log!("nav: go_home");
        self.nav.update(|s| s.go_home());
    }

    pub fn open_category(&self, category_id: &str) {
        leptos::logging::log!("nav: open_category '{}'", category_id);
        let id = category_id.to_string();
        self.nav.update(|s| s.open_category(&id));
    }

    pub fn open_item(&self, item: Item) {
        leptos::logging::log!("nav: open_item id={}", item.id);
        self.nav.update(|s| s.open_item(item));
    }

    pub fn toggle_mobile_menu(&self) {
        self.nav.update(|s| s.toggle_mobile_menu());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &str) -> Item {
        Item {
            id,
            title: format!("item {}", id),
            category: category.to_string(),
            price: Some("1000".to_string()),
            description: String::new(),
            images: vec!["a.jpg".to_string()],
            featured: false,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert_eq!(state.page, Page::Home);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_open_category_is_idempotent() {
        let mut state = NavState::new();
        state.open_category("k1");
        let once = state.clone();
        state.open_category("k1");
        assert_eq!(state, once);
    }

    #[test]
    fn test_go_home_closes_mobile_menu() {
        let mut state = NavState::new();
        state.open_category("k1");
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        state.go_home();
        assert_eq!(state.page, Page::Home);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_toggle_mobile_menu_keeps_page() {
        let mut state = NavState::new();
        state.open_category("k2");
        state.toggle_mobile_menu();
        assert_eq!(state.page, Page::Category("k2".to_string()));
        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open);
        assert_eq!(state.page, Page::Category("k2".to_string()));
    }

    #[test]
    fn test_breadcrumb_category_derived_from_item() {
        let mut state = NavState::new();
        state.open_item(item(7, "k3"));
        assert_eq!(state.selected_item_category(), Some("k3"));

        // Item -> Category(item.category), the breadcrumb transition
        let category = state.selected_item_category().unwrap().to_string();
        state.open_category(&category);
        assert_eq!(state.page, Page::Category("k3".to_string()));
        assert_eq!(state.selected_item_category(), None);
    }

    #[test]
    fn test_nav_state_is_serializable() {
        let mut state = NavState::new();
        state.open_category("k1");
        let json = serde_json::to_string(&state).expect("serializable nav state");
        assert!(json.contains("k1"));
    }

    #[test]
    fn test_no_transition_is_rejected() {
        let mut state = NavState::new();
        state.open_item(item(1, "k1"));
        state.open_item(item(2, "k2"));
        assert_eq!(state.selected_item_category(), Some("k2"));
        state.open_category("k9");
        state.go_home();
        assert_eq!(state.page, Page::Home);
    }
}
