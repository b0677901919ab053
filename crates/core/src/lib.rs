//! Sweet Joy Core - catalog, cart and navigation state.
//!
//! This crate holds everything the storefront knows about the shop that is not
//! HTTP: the fixed bouquet catalog, the per-visitor cart, which page section is
//! highlighted, and a pure projection of all three into a view model.
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no sessions, no
//! templates. Every operation is synchronous and works on an owned value, so
//! the storefront can keep the state wherever it likes (it uses the visitor's
//! session) and the logic is testable without a server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices
//! - [`catalog`] - The immutable product list
//! - [`cart`] - Cart line items and the add/remove/update operations
//! - [`navigation`] - The active page section
//! - [`notify`] - The notification sink cart additions report to
//! - [`view`] - Projection of catalog, cart and navigation into a view model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod notify;
pub mod types;
pub mod view;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, CatalogError, Product};
pub use navigation::{NavigationState, Section, UnknownSection};
pub use notify::{Notifier, Toast};
pub use types::*;
pub use view::{ShopView, project};
