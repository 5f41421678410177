//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and in-flight flag and talks to the session
//! provider from context. Access control is applied by the router wrappers,
//! not by the pages themselves.

pub mod home;
pub mod login;
pub mod password_reset;
pub mod profile;
pub mod register;
pub mod sections;
