//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context and never mutate it except
//! through the session provider's operations.

pub mod nav_bar;
pub mod route_guard;
