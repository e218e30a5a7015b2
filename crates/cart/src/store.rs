//! The cart store: CRUD over the storage slot with notification side
//! effects.
//!
//! Every operation materializes the cart from the slot, mutates it, and
//! writes it back; no cart state is cached across calls, so the slot is
//! always the source of truth. Reads fail soft (corruption ⇒ empty cart),
//! writes surface recoverable [`CartStoreError`]s.

use playjoy_core::{Cart, NewItem, Price, ProductId};

use crate::error::CartStoreError;
use crate::notify::CartNotifier;
use crate::storage::StorageSlot;

/// Cart engine bound to a storage slot and a presentation notifier.
#[derive(Debug)]
pub struct CartStore<S, N> {
    slot: S,
    notifier: N,
}

impl<S: StorageSlot, N: CartNotifier> CartStore<S, N> {
    /// Create a store over the given ports.
    pub const fn new(slot: S, notifier: N) -> Self {
        Self { slot, notifier }
    }

    /// Page-load hook: announce the engine and render the initial badge.
    pub fn init(&self) {
        tracing::debug!("Cart engine loaded");
        self.notifier.refresh_badge(self.count());
    }

    /// Load the cart from the slot.
    ///
    /// Fail-soft: an absent key, unreadable backend, or unparsable value
    /// all load as the empty cart. Parse failures are logged at `warn`
    /// and never propagated; the next persist overwrites the bad value.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Cart slot unreadable, treating as empty");
                return Cart::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!(error = %err, "Stored cart unparsable, treating as empty");
                Cart::new()
            }
        }
    }

    /// Serialize the full cart into the slot, then refresh the badge.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if serialization or the slot write
    /// fails. The error is recoverable: the slot keeps its prior value.
    pub fn persist(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let raw = serde_json::to_string(cart)?;
        self.slot.write(&raw).map_err(|err| {
            tracing::error!(error = %err, "Failed to persist cart");
            err
        })?;
        self.notifier.refresh_badge(cart.count());
        Ok(())
    }

    /// Add a product to the cart and persist.
    ///
    /// An existing line with the same id has its quantity incremented by
    /// the supplied amount (default 1); otherwise a new line is appended.
    /// Shows a confirmation toast naming the item.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if persisting the updated cart fails.
    pub fn add(&self, item: NewItem) -> Result<Cart, CartStoreError> {
        let name = item.name.clone();
        let mut cart = self.load();
        cart.add(item);
        self.persist(&cart)?;
        self.notifier.show_toast(&format!("🛒 \"{name}\" added to cart!"));
        Ok(cart)
    }

    /// Remove a line by product id and persist. Absent ids are a no-op
    /// (the unchanged cart is still written back, matching the browser
    /// behavior).
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if persisting fails.
    pub fn remove(&self, id: ProductId) -> Result<(), CartStoreError> {
        let mut cart = self.load();
        cart.remove(id);
        self.persist(&cart)
    }

    /// Set the quantity of an existing line and persist.
    ///
    /// A quantity of 0 removes the line. An absent id is a silent no-op:
    /// nothing is created and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if persisting fails.
    pub fn set_qty(&self, id: ProductId, qty: u32) -> Result<(), CartStoreError> {
        if qty == 0 {
            return self.remove(id);
        }
        let mut cart = self.load();
        if cart.set_qty(id, qty) {
            self.persist(&cart)?;
        }
        Ok(())
    }

    /// Delete the slot key entirely and hide the badge.
    ///
    /// Distinct from persisting an empty cart, though both load as empty.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if the slot removal fails.
    pub fn clear(&self) -> Result<(), CartStoreError> {
        self.slot.clear().map_err(|err| {
            tracing::error!(error = %err, "Failed to clear cart slot");
            err
        })?;
        self.notifier.refresh_badge(0);
        Ok(())
    }

    /// Total item quantity across the loaded cart. 0 when empty or absent.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.load().count()
    }

    /// Sum of `price × qty` across the loaded cart. 0 when empty.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.load().subtotal()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use playjoy_core::{NewItem, Price, ProductId};

    use super::*;
    use crate::notify::CartNotifier;
    use crate::storage::MemorySlot;

    /// Records every notification for assertions.
    #[derive(Debug, Default)]
    struct RecordingNotifier {
        badges: Mutex<Vec<u32>>,
        toasts: Mutex<Vec<String>>,
    }

    impl CartNotifier for RecordingNotifier {
        fn refresh_badge(&self, count: u32) {
            self.badges.lock().expect("lock").push(count);
        }

        fn show_toast(&self, message: &str) {
            self.toasts.lock().expect("lock").push(message.to_owned());
        }
    }

    fn store() -> CartStore<MemorySlot, RecordingNotifier> {
        CartStore::new(MemorySlot::new(), RecordingNotifier::default())
    }

    fn bear() -> NewItem {
        NewItem::new(ProductId::new(1), "Bear", Price::from_cents(1000))
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let store = store();
        assert!(store.load().is_empty());
        assert_eq!(store.count(), 0);
        assert_eq!(store.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let store = CartStore::new(
            MemorySlot::seeded("{not json"),
            RecordingNotifier::default(),
        );
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let store = store();
        let cart = store.add(bear()).expect("add");
        assert_eq!(cart.count(), 1);

        assert_eq!(*store.notifier.badges.lock().expect("lock"), vec![1]);
        assert_eq!(
            *store.notifier.toasts.lock().expect("lock"),
            vec!["🛒 \"Bear\" added to cart!".to_owned()]
        );
    }

    #[test]
    fn test_add_merges_across_calls() {
        let store = store();
        store.add(bear()).expect("add");
        let cart = store.add(bear().qty(2)).expect("add");
        assert_eq!(cart.len(), 1);
        assert_eq!(store.count(), 3);
        assert_eq!(store.subtotal(), Price::from_cents(3000));
    }

    #[test]
    fn test_set_qty_zero_removes() {
        let store = store();
        store.add(bear().qty(3)).expect("add");
        store.set_qty(ProductId::new(1), 0).expect("set_qty");
        assert_eq!(store.count(), 0);
        assert_eq!(store.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_set_qty_absent_id_writes_nothing() {
        let store = store();
        store.set_qty(ProductId::new(9), 4).expect("set_qty");
        // No persist happened, so the slot key is still absent.
        assert!(store.slot.read().expect("read").is_none());
        assert!(store.notifier.badges.lock().expect("lock").is_empty());
    }

    #[test]
    fn test_clear_removes_slot_key_and_hides_badge() {
        let store = store();
        store.add(bear()).expect("add");
        store.clear().expect("clear");

        assert!(store.slot.read().expect("read").is_none());
        assert!(store.load().is_empty());
        assert_eq!(*store.notifier.badges.lock().expect("lock"), vec![1, 0]);
    }

    #[test]
    fn test_worked_example() {
        let store = store();
        store.add(bear()).expect("add");
        assert_eq!(store.count(), 1);
        assert_eq!(store.subtotal(), Price::from_cents(1000));

        store.add(bear().qty(2)).expect("add");
        assert_eq!(store.count(), 3);
        assert_eq!(store.subtotal(), Price::from_cents(3000));

        store.set_qty(ProductId::new(1), 0).expect("set_qty");
        assert!(store.load().is_empty());
        assert_eq!(store.count(), 0);
        assert_eq!(store.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_init_refreshes_badge() {
        let store = store();
        store.add(bear().qty(2)).expect("add");
        store.notifier.badges.lock().expect("lock").clear();

        store.init();
        assert_eq!(*store.notifier.badges.lock().expect("lock"), vec![2]);
    }
}
