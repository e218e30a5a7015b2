//! The notification port: badge counters and toast confirmations.
//!
//! The store calls this port after mutations; any presentation layer that
//! honors the contract can implement it. The DOM contract for a browser
//! adapter:
//!
//! - Elements with the [`CART_COUNT_CLASS`] marker show the current count
//!   and are hidden when the count is 0.
//! - Elements with the [`NAV_CART_CLASS`] marker navigate to
//!   [`CART_PAGE_URL`] on click.
//! - At most one toast is visible; timing lives in [`crate::toast`].

/// Marker class for badge counter elements.
pub const CART_COUNT_CLASS: &str = "cart-count";

/// Marker class for cart navigation elements.
pub const NAV_CART_CLASS: &str = "nav-cart";

/// Relative URL of the cart page.
pub const CART_PAGE_URL: &str = "cart.html";

/// Presentation collaborator notified after cart mutations.
pub trait CartNotifier {
    /// Update every badge counter to `count`; hide badges when 0.
    fn refresh_badge(&self, count: u32);

    /// Show a transient confirmation, replacing any visible toast.
    fn show_toast(&self, message: &str);
}

/// Notifier that renders to the tracing log, used by headless frontends.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl CartNotifier for LogNotifier {
    fn refresh_badge(&self, count: u32) {
        if count > 0 {
            tracing::info!(count, "Cart badge updated");
        } else {
            tracing::info!("Cart badge hidden");
        }
    }

    fn show_toast(&self, message: &str) {
        tracing::info!(%message, "Toast");
    }
}

/// Notifier that drops every notification, for callers that only want the
/// storage side of the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl CartNotifier for NullNotifier {
    fn refresh_badge(&self, _count: u32) {}

    fn show_toast(&self, _message: &str) {}
}
