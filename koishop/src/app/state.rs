//! # Application State Types
//!
//! All state-related types for the client: screens, routes, the navigation
//! guard, per-screen sub-state, and the in-memory catalog filter.

use shared::{Account, Blog, Koi, Voucher};
use std::sync::Arc;

/// Application screens.
///
/// `Loading` is transient: it auto-advances to `Login` after a fixed delay.
/// `Home`, `KoiCatalog`, `Cart`, and `Account` are the main tabs; detail
/// screens push onto the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Splash screen shown at startup
    Loading,
    /// Login form
    Login,
    /// Registration form
    Signup,
    /// Home tab: blog/post feed
    Home,
    /// Koi catalog tab with client-side filters
    KoiCatalog,
    /// Single koi detail with comments and add-to-cart
    KoiDetail,
    /// Blog catalog list
    BlogCatalog,
    /// Single blog post detail
    BlogDetail,
    /// Account tab: profile, password change, logout
    Account,
    /// Cart tab: in-memory line items
    Cart,
}

impl Screen {
    /// Main tabs in display order (no ordering constraint between them)
    pub fn tabs() -> &'static [Screen] {
        &[Screen::Home, Screen::KoiCatalog, Screen::Cart, Screen::Account]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Loading => "Koi Shop",
            Screen::Login => "Login",
            Screen::Signup => "Create Account",
            Screen::Home => "Home",
            Screen::KoiCatalog => "Koi Catalog",
            Screen::KoiDetail => "Koi Detail",
            Screen::BlogCatalog => "Blog",
            Screen::BlogDetail => "Blog Detail",
            Screen::Account => "My Account",
            Screen::Cart => "Cart",
        }
    }
}

/// A navigation target with its typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Loading,
    Login,
    Signup,
    Home,
    KoiCatalog,
    KoiDetail { id: String },
    BlogCatalog,
    BlogDetail { id: String },
    Account,
    /// Optionally carries a koi selected via "add to cart" on the detail
    /// screen.
    Cart { added: Option<Koi> },
}

impl Route {
    pub fn screen(&self) -> Screen {
        match self {
            Route::Loading => Screen::Loading,
            Route::Login => Screen::Login,
            Route::Signup => Screen::Signup,
            Route::Home => Screen::Home,
            Route::KoiCatalog => Screen::KoiCatalog,
            Route::KoiDetail { .. } => Screen::KoiDetail,
            Route::BlogCatalog => Screen::BlogCatalog,
            Route::BlogDetail { .. } => Screen::BlogDetail,
            Route::Account => Screen::Account,
            Route::Cart { .. } => Screen::Cart,
        }
    }
}

/// Outcome of the navigation guard for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
}

/// Centralized navigation guard, evaluated once per navigation attempt.
///
/// Account and Cart require a live session; catalogs and detail reads are
/// public. Comment posting is guarded separately at the action, since the
/// detail screen itself is readable by anonymous users.
pub fn guard(screen: Screen, authenticated: bool) -> RouteDecision {
    if requires_auth(screen) && !authenticated {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Allow
    }
}

/// Check if a screen requires authentication
pub fn requires_auth(screen: Screen) -> bool {
    matches!(screen, Screen::Account | Screen::Cart)
}

/// Authentication form sub-state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Login form
    Login {
        email: String,
        password: String,
        /// A submit is in flight; cleared when its result arrives
        submitting: bool,
        error: Option<String>,
    },
    /// Signup form
    Signup {
        email: String,
        password: String,
        confirm_password: String,
        phone: String,
        name: String,
        address: String,
        /// A submit is in flight; cleared when its result arrives
        submitting: bool,
        error: Option<String>,
    },
}

impl AuthState {
    pub fn empty_login() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn empty_signup() -> Self {
        AuthState::Signup {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phone: String::new(),
            name: String::new(),
            address: String::new(),
            submitting: false,
            error: None,
        }
    }
}

/// Client-side, in-memory catalog filter. Applied over the already-fetched
/// list; never triggers a network call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KoiFilter {
    pub category: Option<String>,
    pub koi_type: Option<String>,
    pub origin: Option<String>,
    pub gender: Option<String>,
}

impl KoiFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.koi_type.is_none()
            && self.origin.is_none()
            && self.gender.is_none()
    }

    fn matches(&self, koi: &Koi) -> bool {
        self.category.as_ref().map_or(true, |c| &koi.category == c)
            && self.koi_type.as_ref().map_or(true, |t| &koi.koi_type.name == t)
            && self.origin.as_ref().map_or(true, |o| &koi.koi_type.origin == o)
            && self.gender.as_ref().map_or(true, |g| &koi.gender == g)
    }

    /// Filter the catalog, preserving original relative order.
    pub fn apply(&self, catalog: &[Koi]) -> Vec<Koi> {
        catalog.iter().filter(|k| self.matches(k)).cloned().collect()
    }
}

/// Koi catalog screen state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub koi: Vec<Koi>,
    pub filter: KoiFilter,
    pub loading: bool,
    /// On fetch failure the list stays empty; the error is kept for display
    pub error: Option<String>,
}

impl CatalogState {
    /// The list the screen renders: the fetched catalog with the current
    /// filter applied.
    pub fn visible(&self) -> Vec<Koi> {
        self.filter.apply(&self.koi)
    }

    /// Distinct categories present in the catalog, for the filter picker
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for koi in &self.koi {
            if !koi.category.is_empty() && !seen.contains(&koi.category) {
                seen.push(koi.category.clone());
            }
        }
        seen
    }
}

/// Koi detail screen state
#[derive(Debug, Clone, Default)]
pub struct KoiDetailState {
    pub koi: Option<Koi>,
    pub loading: bool,
    pub error: Option<String>,
    /// Inline error for the comment form specifically
    pub comment_error: Option<String>,
    /// Draft comment fields
    pub comment_rating: u8,
    pub comment_content: String,
}

/// Blog feed / detail state
#[derive(Debug, Clone, Default)]
pub struct BlogState {
    pub posts: Vec<Blog>,
    pub detail: Option<Blog>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Account screen state
#[derive(Debug, Clone, Default)]
pub struct AccountState {
    pub account: Option<Account>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Global application state
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Navigation stack; detail screens push, go-back pops
    pub nav_stack: Vec<Route>,
    /// Bearer token mirror for synchronous guard checks; the session type
    /// owns the authoritative copy
    pub auth_token: Option<String>,
    /// Authentication form state
    pub auth: AuthState,
    /// Koi catalog state
    pub catalog: CatalogState,
    /// Koi detail state
    pub koi_detail: KoiDetailState,
    /// Blog feed and detail state
    pub blog: BlogState,
    /// Account screen state
    pub account: AccountState,
    /// Cart line items. In-memory only: the cart does not survive an app
    /// restart (recorded product decision, see DESIGN.md)
    pub cart: Vec<Koi>,
    /// Server-side cart listing, fetched when the cart screen mounts
    pub server_cart: Vec<shared::CartItem>,
    /// Vouchers fetched for the cart screen
    pub vouchers: Vec<Voucher>,
    /// API client
    pub api_client: Option<Arc<crate::services::api::ApiClient>>,
}

impl AppState {
    /// Check if user is authenticated (has a live token)
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Cart total before any voucher, in VND
    pub fn cart_total(&self) -> u64 {
        self.cart.iter().map(|k| k.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::KoiType;

    fn koi(id: &str, category: &str, type_name: &str, origin: &str, gender: &str) -> Koi {
        Koi {
            id: id.to_string(),
            name: format!("Koi {}", id),
            origin: origin.to_string(),
            image: String::new(),
            description: String::new(),
            gender: gender.to_string(),
            size: 30.0,
            koi_type: KoiType {
                id: format!("t-{}", type_name),
                name: type_name.to_string(),
                origin: origin.to_string(),
            },
            feeding_amount: 10.0,
            screening_rate: 90.0,
            category: category.to_string(),
            price: 1_000_000,
            sold: false,
            certificates: vec![],
            year_of_birth: 2022,
            consignment_status: None,
            comments: vec![],
        }
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Login.title(), "Login");
        assert_eq!(Screen::KoiCatalog.title(), "Koi Catalog");
        assert_eq!(Screen::Account.title(), "My Account");
    }

    #[test]
    fn test_tabs_order() {
        let tabs = Screen::tabs();
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs[0], Screen::Home);
        assert_eq!(tabs[3], Screen::Account);
    }

    #[test]
    fn test_requires_auth() {
        assert!(requires_auth(Screen::Account));
        assert!(requires_auth(Screen::Cart));
        assert!(!requires_auth(Screen::KoiCatalog));
        assert!(!requires_auth(Screen::KoiDetail));
        assert!(!requires_auth(Screen::BlogCatalog));
        assert!(!requires_auth(Screen::Login));
    }

    #[test]
    fn test_guard_redirects_anonymous_from_protected_screens() {
        assert_eq!(guard(Screen::Account, false), RouteDecision::RedirectToLogin);
        assert_eq!(guard(Screen::Cart, false), RouteDecision::RedirectToLogin);
        assert_eq!(guard(Screen::Account, true), RouteDecision::Allow);
        assert_eq!(guard(Screen::KoiCatalog, false), RouteDecision::Allow);
    }

    #[test]
    fn test_route_carries_params() {
        let route = Route::KoiDetail {
            id: "k42".to_string(),
        };
        assert_eq!(route.screen(), Screen::KoiDetail);

        let cart = Route::Cart { added: None };
        assert_eq!(cart.screen(), Screen::Cart);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        // 10 items, 3 of which are "F1 Hybrid"
        let hybrids = ["k1", "k4", "k8"];
        let catalog: Vec<Koi> = (0..10)
            .map(|i| {
                let id = format!("k{}", i);
                let category = if hybrids.contains(&id.as_str()) {
                    "F1 Hybrid"
                } else {
                    "Purebred"
                };
                koi(&id, category, "Kohaku", "Japan", "Male")
            })
            .collect();

        let filter = KoiFilter {
            category: Some("F1 Hybrid".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&catalog);

        let ids: Vec<&str> = filtered.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["k1", "k4", "k8"]);
    }

    #[test]
    fn test_filter_combines_criteria() {
        let catalog = vec![
            koi("a", "F1 Hybrid", "Kohaku", "Japan", "Male"),
            koi("b", "F1 Hybrid", "Showa", "Japan", "Male"),
            koi("c", "F1 Hybrid", "Kohaku", "Vietnam", "Male"),
            koi("d", "F1 Hybrid", "Kohaku", "Japan", "Female"),
        ];

        let filter = KoiFilter {
            category: Some("F1 Hybrid".to_string()),
            koi_type: Some("Kohaku".to_string()),
            origin: Some("Japan".to_string()),
            gender: Some("Male".to_string()),
        };

        let filtered = filter.apply(&catalog);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let catalog = vec![
            koi("a", "F1 Hybrid", "Kohaku", "Japan", "Male"),
            koi("b", "Purebred", "Showa", "Vietnam", "Female"),
        ];
        let filter = KoiFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&catalog).len(), 2);
    }

    #[test]
    fn test_catalog_categories_dedup() {
        let mut state = CatalogState::default();
        state.koi = vec![
            koi("a", "F1 Hybrid", "Kohaku", "Japan", "Male"),
            koi("b", "F1 Hybrid", "Showa", "Japan", "Male"),
            koi("c", "Purebred", "Kohaku", "Japan", "Male"),
        ];
        assert_eq!(state.categories(), vec!["F1 Hybrid", "Purebred"]);
    }
}
