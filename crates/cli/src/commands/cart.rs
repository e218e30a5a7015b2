//! Cart manipulation commands.
//!
//! Each command opens the cart fresh from the slot file, applies one
//! mutation through the store, and reports the resulting state via the
//! log. Badge refreshes and toasts surface through [`LogNotifier`].

use rust_decimal::Decimal;

use playjoy_cart::{CartStore, CartStoreError, FileSlot, LogNotifier};
use playjoy_core::{NewItem, Price, ProductId};

type Store = CartStore<FileSlot, LogNotifier>;

/// Add a product to the cart.
#[allow(clippy::too_many_arguments)]
pub fn add(
    store: &Store,
    id: i32,
    name: &str,
    price: Decimal,
    qty: Option<u32>,
    original_price: Option<Decimal>,
    emoji: Option<String>,
    category: Option<String>,
) -> Result<(), CartStoreError> {
    let mut item = NewItem::new(ProductId::new(id), name, Price::new(price));
    if let Some(qty) = qty {
        item = item.qty(qty);
    }
    if let Some(original) = original_price {
        item = item.original_price(Price::new(original));
    }
    if let Some(emoji) = emoji {
        item = item.emoji(emoji);
    }
    if let Some(category) = category {
        item = item.category(category);
    }

    let cart = store.add(item)?;
    tracing::info!(
        "Cart now holds {} item(s), subtotal {}",
        cart.count(),
        cart.subtotal().display()
    );
    Ok(())
}

/// Remove a line by product id.
pub fn remove(store: &Store, id: i32) -> Result<(), CartStoreError> {
    store.remove(ProductId::new(id))?;
    tracing::info!("Removed product {id}");
    Ok(())
}

/// Set the quantity of an existing line; 0 removes it.
pub fn set_qty(store: &Store, id: i32, qty: u32) -> Result<(), CartStoreError> {
    store.set_qty(ProductId::new(id), qty)?;
    if qty == 0 {
        tracing::info!("Removed product {id}");
    } else {
        tracing::info!("Product {id} quantity set to {qty}");
    }
    Ok(())
}

/// Delete the cart slot entirely.
pub fn clear(store: &Store) -> Result<(), CartStoreError> {
    store.clear()?;
    tracing::info!("Cart cleared");
    Ok(())
}

/// List line items in insertion order with count and subtotal.
pub fn show(store: &Store) {
    let cart = store.load();
    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return;
    }

    for item in &cart {
        let emoji = item.emoji.as_deref().unwrap_or("");
        tracing::info!(
            "  {emoji} {} x{} @ {} = {}",
            item.name,
            item.qty,
            item.price.display(),
            item.line_total().display()
        );
    }
    tracing::info!(
        "{} item(s), subtotal {}",
        cart.count(),
        cart.subtotal().display()
    );
}
