//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use sweet_joy_core::{ShopView, Toast, project};
use tower_sessions::Session;
use tracing::instrument;

use crate::content::SiteContent;
use crate::error::Result;
use crate::filters;
use crate::models::ShopSession;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Catalog, cart and navigation as display data.
    pub view: ShopView,
    /// Static page copy.
    pub content: SiteContent,
    /// Notifications queued since the last page view.
    pub toasts: Vec<Toast>,
}

/// Display the storefront page.
///
/// Drains the visitor's toast queue, so each notification shows once.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let mut shop = ShopSession::load(&session).await?;

    let toasts = shop.take_toasts();
    if !toasts.is_empty() {
        shop.save(&session).await?;
    }

    Ok(HomeTemplate {
        view: project(state.catalog(), &shop.cart, &shop.navigation),
        content: state.content().clone(),
        toasts,
    })
}
