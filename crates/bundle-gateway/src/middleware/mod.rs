//! Middleware stack for the gateway.
//!
//! Layer order (outermost first): CORS headers → CORS preflight → Trace →
//! Body limit → Handler.

pub mod cors;

pub use cors::{apply_cors, create_cors_layer};
