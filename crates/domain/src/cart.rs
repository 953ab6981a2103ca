//! Cart ledger
//!
//! The cart accumulates quantities per product from add and remove events. Its total is never
//! stored: it is derived from the current entries whenever it is requested.

use std::num::NonZeroU32;

use indexmap::IndexMap;

use crate::{Amount, Product, ProductID};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cart {
    entries: IndexMap<ProductID, CartEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// The product as it was when it was first added.
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartEntry {
    #[must_use]
    pub fn subtotal(&self) -> Amount {
        self.product.price.times(self.quantity.get())
    }
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, product: &Product) {
        self.entries
            .entry(product.id)
            .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(1))
            .or_insert_with(|| CartEntry {
                product: product.clone(),
                quantity: NonZeroU32::MIN,
            });
    }

    /// Removing a product which is not in the cart has no effect.
    pub fn decrement(&mut self, product: &Product) {
        let Some(entry) = self.entries.get_mut(&product.id) else {
            return;
        };

        match NonZeroU32::new(entry.quantity.get() - 1) {
            Some(quantity) => entry.quantity = quantity,
            None => {
                self.entries.shift_remove(&product.id);
            }
        }
    }

    #[must_use]
    pub fn total(&self) -> Amount {
        self.entries.values().map(CartEntry::subtotal).sum()
    }

    #[must_use]
    pub fn quantity(&self, id: ProductID) -> u32 {
        self.entries
            .get(&id)
            .map_or(0, |entry| entry.quantity.get())
    }

    #[must_use]
    pub fn entry(&self, id: ProductID) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    /// Entries in the order their products were first added.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
