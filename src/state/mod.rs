//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `roster`, `notify`) so
//! individual components can depend on small focused models. Each is
//! provided as an `RwSignal` context from the app root; the session has
//! a single writer (`net::session_client`).

pub mod notify;
pub mod roster;
pub mod session;
