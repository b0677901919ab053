//! Section navigation handler.

use axum::{extract::Path, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::ShopSession;

/// Highlight a section and scroll to it.
///
/// Redirects to `/#<slug>` so the browser jumps to the section's anchor.
/// An unknown slug leaves the highlight alone and lands at the top.
#[instrument(skip(session))]
pub async fn select(Path(slug): Path<String>, session: Session) -> Result<Redirect> {
    let mut shop = ShopSession::load(&session).await?;

    match shop.navigation.select(&slug) {
        Ok(section) => {
            shop.save(&session).await?;
            Ok(Redirect::to(&format!("/#{}", section.slug())))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unknown section");
            Ok(Redirect::to("/"))
        }
    }
}
