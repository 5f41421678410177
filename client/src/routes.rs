//! Route table and role-gated navigation.
//!
//! DESIGN
//! ======
//! Every page the app can show is an `AppRoute` variant. Access rules live in
//! `required_roles` and the navigation menu is derived from the same rules,
//! so the menu can never offer a page the guard would refuse.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::AccountType;

const FARMER_ONLY: &[AccountType] = &[AccountType::Farmer];
const AGRONOMIST_ONLY: &[AccountType] = &[AccountType::Agronomist];
const ANY_ROLE: &[AccountType] = &[AccountType::Farmer, AccountType::Agronomist];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Home,
    Profile,
    Farms,
    Pastures,
    Drones,
    Biomass,
    Advisory,
    Chat,
}

impl AppRoute {
    pub const ALL: [Self; 12] = [
        Self::Login,
        Self::Register,
        Self::ForgotPassword,
        Self::ResetPassword,
        Self::Home,
        Self::Profile,
        Self::Farms,
        Self::Pastures,
        Self::Drones,
        Self::Biomass,
        Self::Advisory,
        Self::Chat,
    ];

    /// Entry point for signed-out users.
    pub const LOGIN_ENTRY: Self = Self::Login;
    /// Landing page for signed-in users.
    pub const HOME_ENTRY: Self = Self::Home;

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::Farms => "/farms",
            Self::Pastures => "/pastures",
            Self::Drones => "/drones",
            Self::Biomass => "/biomass",
            Self::Advisory => "/advisory",
            Self::Chat => "/chat",
        }
    }

    /// Path without the leading slash, as used by `StaticSegment`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Create account",
            Self::ForgotPassword => "Forgot password",
            Self::ResetPassword => "Reset password",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Farms => "Farms",
            Self::Pastures => "Pastures",
            Self::Drones => "Drones",
            Self::Biomass => "Biomass",
            Self::Advisory => "Advisory",
            Self::Chat => "Assistant",
        }
    }

    /// Reachable without a session.
    #[must_use]
    pub fn is_public(self) -> bool {
        matches!(self, Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword)
    }

    /// Roles admitted to a signed-in route. `None` for public routes.
    #[must_use]
    pub fn required_roles(self) -> Option<&'static [AccountType]> {
        match self {
            Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword => None,
            Self::Farms | Self::Pastures | Self::Drones => Some(FARMER_ONLY),
            Self::Advisory => Some(AGRONOMIST_ONLY),
            Self::Home | Self::Profile | Self::Biomass | Self::Chat => Some(ANY_ROLE),
        }
    }

    /// Whether a user with `role` may open this route.
    #[must_use]
    pub fn admits(self, role: AccountType) -> bool {
        self.required_roles().is_some_and(|roles| roles.contains(&role))
    }

    /// Find the route for a request path. Trailing slashes are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Menu entries for a signed-in user, in display order.
#[must_use]
pub fn nav_for(role: AccountType) -> Vec<AppRoute> {
    AppRoute::ALL
        .into_iter()
        .filter(|route| !route.is_public() && route.admits(role))
        .collect()
}
