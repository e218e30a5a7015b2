//! The cart model: line items and the ordered cart collection.
//!
//! `Cart` owns all merge/remove/totals rules but performs no I/O; the
//! persisted representation is a JSON array of [`CartItem`] records in
//! insertion order. Insertion order is meaningful for display and is
//! preserved by every operation.
//!
//! # Invariants
//!
//! - At most one line item per distinct [`ProductId`].
//! - Every stored `qty` is at least 1; a quantity driven to zero removes
//!   the line item instead.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// One product entry with quantity in the cart.
///
/// Field names follow the persisted slot format, which mirrors the
/// storefront's product records (`originalPrice` camelCase included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-discount price, informational only. Never enters totals.
    #[serde(
        rename = "originalPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub qty: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// Input record for an add operation.
///
/// Explicit construction with defaulted fields: `id`, `name`, and `price`
/// are required; display metadata is optional; `qty` defaults to 1 when
/// omitted (or supplied as 0 — an add is always an add).
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub original_price: Option<Price>,
    pub emoji: Option<String>,
    pub category: Option<String>,
    pub qty: Option<u32>,
}

impl NewItem {
    /// Create an add request with the required fields and all defaults.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            emoji: None,
            category: None,
            qty: None,
        }
    }

    /// Set an explicit quantity.
    #[must_use]
    pub const fn qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Set the pre-discount price.
    #[must_use]
    pub const fn original_price(mut self, price: Price) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the display emoji.
    #[must_use]
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Set the display category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The quantity this add contributes: the supplied qty, or 1.
    fn effective_qty(&self) -> u32 {
        match self.qty {
            Some(qty) if qty > 0 => qty,
            _ => 1,
        }
    }
}

/// Ordered collection of line items for one shopper session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product: an existing line with the same id has its quantity
    /// incremented; otherwise a new line is appended.
    pub fn add(&mut self, new: NewItem) {
        let qty = new.effective_qty();
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == new.id) {
            existing.qty = existing.qty.saturating_add(qty);
        } else {
            self.items.push(CartItem {
                id: new.id,
                name: new.name,
                price: new.price,
                original_price: new.original_price,
                emoji: new.emoji,
                category: new.category,
                qty,
            });
        }
    }

    /// Remove the line with the given id. Absent ids are a silent no-op.
    ///
    /// Returns `true` if a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Set the quantity of an existing line. A quantity of 0 removes the
    /// line; an absent id is a silent no-op (never creates a line).
    ///
    /// Returns `true` if the cart changed.
    pub fn set_qty(&mut self, id: ProductId, qty: u32) -> bool {
        if qty == 0 {
            return self.remove(id);
        }
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.qty = qty;
                true
            }
            None => false,
        }
    }

    /// Total item quantity across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, i| sum.saturating_add(i.qty))
    }

    /// Sum of `price × qty` across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
