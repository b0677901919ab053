//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded into the request span)
//! 4. Security headers (CSP, frame denial, etc.)
//! 5. Session layer (tower-sessions with a moka-backed store)

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod session_store;

pub use request_id::{REQUEST_ID_HEADER, make_request_span, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
pub use session_store::MokaSessionStore;
