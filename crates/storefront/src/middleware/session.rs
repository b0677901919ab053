//! Session middleware configuration.
//!
//! Sessions live in memory in a [`MokaSessionStore`]: nothing is persisted,
//! and a visitor's record is evicted after the idle timeout or on restart.

use tower_sessions::{Expiry, SessionManagerLayer, cookie::time::Duration};

use super::session_store::MokaSessionStore;
use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "sj_session";

/// Create the session layer with an in-memory store.
///
/// Every request refreshes the session, so the idle timeout counts from the
/// visitor's last page view.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaSessionStore> {
    let idle = Duration::minutes(config.session_idle_minutes);

    SessionManagerLayer::new(MokaSessionStore::new(idle.unsigned_abs()))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(idle))
        .with_always_save(true)
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
