//! View model for the storefront page.
//!
//! [`project`] turns (catalog, cart, navigation) into plain display data with
//! prices already formatted. It has no template or HTTP dependency, so what the
//! page shows can be tested without rendering anything.

use crate::cart::{Cart, CartItem};
use crate::catalog::{Catalog, Product};
use crate::navigation::{NavigationState, Section};
use crate::types::ProductId;

/// A header menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// A catalog card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

/// A line in the cart drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart drawer contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: String,
    pub count: u32,
}

impl CartView {
    /// Whether to show the "cart is empty" message instead of lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the header badge is visible.
    #[must_use]
    pub const fn show_badge(&self) -> bool {
        self.count > 0
    }
}

/// Everything the page needs from the shop state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopView {
    pub nav: Vec<NavItemView>,
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            price: item.product.price.to_string(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartLineView::from).collect(),
            total: cart.total().to_string(),
            count: cart.count(),
        }
    }
}

/// Project shop state into display data.
#[must_use]
pub fn project(catalog: &Catalog, cart: &Cart, navigation: &NavigationState) -> ShopView {
    ShopView {
        nav: Section::ALL
            .into_iter()
            .map(|section| NavItemView {
                slug: section.slug(),
                label: section.label(),
                active: navigation.is_active(section),
            })
            .collect(),
        products: catalog.iter().map(ProductCardView::from).collect(),
        cart: CartView::from(cart),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::notify::Toast;

    #[test]
    fn test_project_empty_cart() {
        let view = project(
            &Catalog::seeded(),
            &Cart::new(),
            &NavigationState::default(),
        );

        assert!(view.cart.is_empty());
        assert!(!view.cart.show_badge());
        assert_eq!(view.cart.total, "0₽");
        assert_eq!(view.products.len(), 3);
        assert_eq!(view.products[1].price, "3200₽");
    }

    #[test]
    fn test_project_marks_one_active_section() {
        let mut nav = NavigationState::new();
        nav.select("contacts").unwrap();

        let view = project(&Catalog::seeded(), &Cart::new(), &nav);
        let active: Vec<&str> = view
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.slug)
            .collect();

        assert_eq!(view.nav.len(), Section::ALL.len());
        assert_eq!(active, vec!["contacts"]);
    }

    #[test]
    fn test_project_cart_lines() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        let mut toasts: Vec<Toast> = Vec::new();
        let first = catalog.get(ProductId::new(1)).unwrap();
        let third = catalog.get(ProductId::new(3)).unwrap();

        cart.add(third, &mut toasts);
        cart.add(first, &mut toasts);
        cart.add(first, &mut toasts);

        let view = project(&catalog, &cart, &NavigationState::default());

        assert!(view.cart.show_badge());
        assert_eq!(view.cart.count, 3);
        assert_eq!(view.cart.total, "6800₽");
        assert_eq!(view.cart.items.len(), 2);
        assert_eq!(view.cart.items[0].name, "Радужный праздник");
        assert_eq!(view.cart.items[1].quantity, 2);
        assert_eq!(view.cart.items[1].price, "2500₽");
        assert_eq!(view.cart.items[1].line_total, "5000₽");
    }
}
