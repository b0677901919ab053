//! Per-visitor state kept in the session.
//!
//! The cart, the highlighted section and any pending toasts live together
//! under a single session key. The session store is in-memory, so all of it
//! disappears on restart or idle expiry.

use serde::{Deserialize, Serialize};
use sweet_joy_core::{Cart, NavigationState, Toast};
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// Key for the visitor's shop state.
    pub const SHOP: &str = "shop";
}

/// Everything the storefront remembers about one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSession {
    pub cart: Cart,
    pub navigation: NavigationState,
    /// Flash queue: rendered on the next page view, then cleared.
    #[serde(default)]
    pub toasts: Vec<Toast>,
}

impl ShopSession {
    /// Load the visitor's state, or a fresh one on first visit.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or holds malformed data.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        Ok(session.get::<Self>(keys::SHOP).await?.unwrap_or_default())
    }

    /// Write the visitor's state back to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(keys::SHOP, self).await
    }

    /// Remove and return the pending toasts.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use sweet_joy_core::{Catalog, ProductId, Section};

    use super::*;
    use crate::middleware::MokaSessionStore;

    fn session() -> Session {
        Session::new(
            None,
            Arc::new(MokaSessionStore::new(Duration::from_secs(60))),
            None,
        )
    }

    #[tokio::test]
    async fn test_load_defaults_on_first_visit() {
        let state = ShopSession::load(&session()).await.unwrap();
        assert!(state.cart.is_empty());
        assert_eq!(state.navigation.active(), Section::Home);
        assert!(state.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let session = session();
        let catalog = Catalog::seeded();

        let mut state = ShopSession::default();
        let product = catalog.get(ProductId::new(2)).unwrap();
        state.cart.add(product, &mut state.toasts);
        state.navigation.select("catalog").unwrap();
        state.save(&session).await.unwrap();

        let loaded = ShopSession::load(&session).await.unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.cart.count(), 1);
        assert_eq!(loaded.toasts.len(), 1);
    }

    #[test]
    fn test_take_toasts_drains_queue() {
        let mut state = ShopSession {
            toasts: vec![Toast::new("t", "d")],
            ..ShopSession::default()
        };

        assert_eq!(state.take_toasts().len(), 1);
        assert!(state.take_toasts().is_empty());
    }
}
