//! HTTP route handlers for storefront.
//!
//! Every mutation is a plain form POST answered with a 303 redirect back to
//! the page (Post/Redirect/Get). The redirect fragment scrolls the browser to
//! the right place and opens the cart drawer when needed.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - The storefront page
//! GET  /health            - Health check
//!
//! # Navigation
//! GET  /sections/{slug}   - Highlight a section, redirect to its anchor
//!
//! # Cart
//! POST /cart/add          - Add one unit (form: product_id)
//! POST /cart/update       - Change quantity (form: product_id, delta)
//! POST /cart/remove       - Remove a line (form: product_id)
//! GET  /cart/count        - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod home;
pub mod sections;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/sections/{slug}", get(sections::select))
        .nest("/cart", cart_routes())
}
