//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic out of components so it can be unit
//! tested without a browser.

pub mod auth;
pub mod form;
