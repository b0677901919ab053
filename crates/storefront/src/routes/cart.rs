//! Cart route handlers.
//!
//! The cart itself lives in the visitor's session. Each handler loads it,
//! applies one cart operation, saves it and redirects back to the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use sweet_joy_core::ProductId;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::ShopSession;
use crate::state::AppState;

/// Where to land after adding: back at the catalog.
pub const AFTER_ADD: &str = "/#catalog";

/// Where to land after editing the cart: drawer still open.
pub const AFTER_EDIT: &str = "/#cart";

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

fn cart_breadcrumb(message: &str, product_id: ProductId) {
    let id = product_id.to_string();
    let data: &[(&str, &str)] = &[("product_id", id.as_str())];
    add_breadcrumb("cart", message, Some(data));
}

/// Add one unit of a catalog product.
///
/// Queues an "added to cart" toast for the next page view.
///
/// # Errors
///
/// Returns 404 if the product isn't in the catalog.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut shop = ShopSession::load(&session).await?;
    shop.cart.add(product, &mut shop.toasts);
    shop.save(&session).await?;

    cart_breadcrumb("Added to cart", product.id);
    tracing::info!(product_id = %product.id, count = shop.cart.count(), "Added to cart");

    Ok(Redirect::to(AFTER_ADD))
}

/// Change a line's quantity by `delta`, stopping at 1.
///
/// Unknown products are ignored.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut shop = ShopSession::load(&session).await?;

    match shop.cart.update_quantity(form.product_id, form.delta) {
        Some(quantity) => {
            shop.save(&session).await?;
            cart_breadcrumb("Updated quantity", form.product_id);
            tracing::debug!(product_id = %form.product_id, quantity, "Updated quantity");
        }
        None => {
            tracing::debug!(product_id = %form.product_id, "Quantity update for item not in cart");
        }
    }

    Ok(Redirect::to(AFTER_EDIT))
}

/// Remove a line from the cart. Removing an absent line is a no-op.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let mut shop = ShopSession::load(&session).await?;

    if shop.cart.remove(form.product_id) {
        shop.save(&session).await?;
        cart_breadcrumb("Removed from cart", form.product_id);
        tracing::debug!(product_id = %form.product_id, "Removed from cart");
    }

    Ok(Redirect::to(AFTER_EDIT))
}

/// Get cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let shop = ShopSession::load(&session).await?;
    Ok(CartCountTemplate {
        count: shop.cart.count(),
    })
}
