//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only process-wide mutable state. It is created once by
//! the composition root and reached through Leptos context.

pub mod session;
