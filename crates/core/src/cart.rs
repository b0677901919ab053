//! The visitor's shopping cart.
//!
//! A cart is an ordered list of line items, at most one per product. Items
//! appear in the order they were first added. Quantities never drop below 1:
//! decrementing stops at 1, and only [`Cart::remove`] takes an item out.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::notify::Notifier;
use crate::types::{Price, ProductId};

/// Title of the notification emitted on every [`Cart::add`].
pub const ADDED_TITLE: &str = "Добавлено в корзину";

/// One distinct product in the cart, with how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Bumps the quantity of an existing line, or appends a new line with
    /// quantity 1. Always tells `notifier` which product was added.
    pub fn add(&mut self, product: &Product, notifier: &mut dyn Notifier) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
        notifier.display(ADDED_TITLE, &product.name);
    }

    /// Drop the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() != before
    }

    /// Shift the quantity of `id` by `delta`, never going below 1.
    ///
    /// Returns the new quantity, or `None` if the product isn't in the cart.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) -> Option<u32> {
        let item = self.items.iter_mut().find(|i| i.id() == id)?;
        let wanted = i64::from(item.quantity) + i64::from(delta);
        item.quantity = u32::try_from(wanted.max(1)).unwrap_or(u32::MAX);
        Some(item.quantity)
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |acc: u32, i| acc.saturating_add(i.quantity))
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::notify::Toast;

    fn product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Bouquet {id}"),
            price: Price::rubles(price),
            image: format!("https://cdn.example.test/{id}.jpg"),
            description: String::new(),
            category: String::new(),
        }
    }

    fn quantities(cart: &Cart) -> Vec<(u32, u32)> {
        cart.items()
            .iter()
            .map(|i| (i.id().as_u32(), i.quantity))
            .collect()
    }

    #[test]
    fn test_add_to_empty_cart() {
        for p in Catalog::seeded().iter() {
            let mut cart = Cart::new();
            cart.add(p, &mut Vec::<Toast>::new());
            assert_eq!(cart.len(), 1);
            assert_eq!(cart.items()[0].id(), p.id);
            assert_eq!(cart.items()[0].quantity, 1);
        }
    }

    #[test]
    fn test_add_twice_merges_line() {
        for p in Catalog::seeded().iter() {
            let mut cart = Cart::new();
            let mut toasts: Vec<Toast> = Vec::new();
            cart.add(p, &mut toasts);
            cart.add(p, &mut toasts);
            assert_eq!(cart.len(), 1);
            assert_eq!(cart.items()[0].quantity, 2);
        }
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut cart = Cart::new();
        let mut toasts: Vec<Toast> = Vec::new();
        cart.add(&product(3, 100), &mut toasts);
        cart.add(&product(1, 100), &mut toasts);
        cart.add(&product(3, 100), &mut toasts);
        cart.add(&product(2, 100), &mut toasts);

        assert_eq!(quantities(&cart), vec![(3, 2), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_add_notifies_with_product_name() {
        let mut cart = Cart::new();
        let mut toasts: Vec<Toast> = Vec::new();
        let p = product(1, 2500);

        cart.add(&p, &mut toasts);
        cart.add(&p, &mut toasts);

        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0], Toast::new(ADDED_TITLE, "Bouquet 1"));
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        let p = product(1, 2500);
        cart.add(&p, &mut Vec::<Toast>::new());
        cart.add(&p, &mut Vec::<Toast>::new());

        assert_eq!(cart.update_quantity(p.id, -100), Some(1));
        assert_eq!(cart.get(p.id).unwrap().quantity, 1);

        // decrementing at the floor keeps the item
        assert_eq!(cart.update_quantity(p.id, -1), Some(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_increments() {
        let mut cart = Cart::new();
        let p = product(1, 2500);
        cart.add(&p, &mut Vec::<Toast>::new());

        assert_eq!(cart.update_quantity(p.id, 1), Some(2));
        assert_eq!(cart.update_quantity(p.id, 5), Some(7));
    }

    #[test]
    fn test_update_quantity_saturates_at_max() {
        let mut cart = Cart::new();
        let p = product(1, 1);
        cart.add(&p, &mut Vec::<Toast>::new());

        assert_eq!(cart.update_quantity(p.id, i32::MAX), Some(2_147_483_648));
        cart.update_quantity(p.id, i32::MAX);
        cart.update_quantity(p.id, i32::MAX);
        assert_eq!(cart.get(p.id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2500), &mut Vec::<Toast>::new());
        let before = cart.clone();

        assert_eq!(cart.update_quantity(ProductId::new(9), 1), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2500), &mut Vec::<Toast>::new());
        cart.add(&product(2, 3200), &mut Vec::<Toast>::new());

        assert!(cart.remove(ProductId::new(1)));
        let after_first = cart.clone();

        assert!(!cart.remove(ProductId::new(1)));
        assert_eq!(cart, after_first);
        assert_eq!(quantities(&cart), vec![(2, 1)]);
    }

    #[test]
    fn test_totals_after_sequence() {
        let a = product(1, 2500);
        let b = product(2, 3200);
        let mut cart = Cart::new();
        let mut toasts: Vec<Toast> = Vec::new();

        cart.add(&a, &mut toasts);
        cart.add(&a, &mut toasts);
        cart.add(&b, &mut toasts);
        cart.update_quantity(a.id, 1);

        assert_eq!(cart.total(), Price::rubles(3 * 2500 + 3200));
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_seeded_scenario() {
        let catalog = Catalog::seeded();
        let first = catalog.get(ProductId::new(1)).unwrap();
        let second = catalog.get(ProductId::new(2)).unwrap();
        let mut cart = Cart::new();
        let mut toasts: Vec<Toast> = Vec::new();

        cart.add(first, &mut toasts);
        assert_eq!(quantities(&cart), vec![(1, 1)]);

        cart.add(second, &mut toasts);
        assert_eq!(quantities(&cart), vec![(1, 1), (2, 1)]);

        cart.update_quantity(ProductId::new(1), 1);
        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);

        assert_eq!(cart.total(), Price::rubles(8200));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2500), &mut Vec::<Toast>::new());

        let value = serde_json::to_value(&cart).unwrap();
        let item = &value["items"][0];
        assert_eq!(item["id"], 1);
        assert_eq!(item["price"], 2500);
        assert_eq!(item["quantity"], 1);

        let back: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(back, cart);
    }
}
