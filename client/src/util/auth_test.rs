use super::*;
use crate::net::types::User;

fn state_with(account_type: Option<AccountType>, loading: bool) -> AuthState {
    AuthState {
        user: account_type.map(|account_type| User {
            id: "u1".to_owned(),
            email: "a@x.com".to_owned(),
            full_name: "Ana".to_owned(),
            account_type,
            phone: String::new(),
            country: String::new(),
            city: String::new(),
            education: None,
            specializations: Vec::new(),
        }),
        loading,
    }
}

#[test]
fn loading_never_redirects_for_any_route() {
    for account_type in [None, Some(AccountType::Farmer), Some(AccountType::Agronomist)] {
        let state = state_with(account_type, true);
        for route in AppRoute::ALL {
            assert_eq!(guard_decision(&state, route.required_roles()), GuardDecision::Loading);
            assert_eq!(guard_decision(&state, None), GuardDecision::Loading);
        }
    }
}

#[test]
fn missing_user_redirects_to_login() {
    let state = state_with(None, false);
    assert_eq!(
        guard_decision(&state, AppRoute::Farms.required_roles()),
        GuardDecision::RedirectTo(AppRoute::Login)
    );
    assert_eq!(guard_decision(&state, None), GuardDecision::RedirectTo(AppRoute::Login));
}

#[test]
fn farmer_on_agronomist_route_redirects_home() {
    let state = state_with(Some(AccountType::Farmer), false);
    assert_eq!(
        guard_decision(&state, Some(&[AccountType::Agronomist])),
        GuardDecision::RedirectTo(AppRoute::Home)
    );
}

#[test]
fn matching_role_renders() {
    let state = state_with(Some(AccountType::Agronomist), false);
    assert_eq!(guard_decision(&state, AppRoute::Advisory.required_roles()), GuardDecision::Render);
    assert_eq!(guard_decision(&state, AppRoute::Biomass.required_roles()), GuardDecision::Render);
}

#[test]
fn no_role_requirement_renders_for_any_user() {
    let state = state_with(Some(AccountType::Farmer), false);
    assert_eq!(guard_decision(&state, None), GuardDecision::Render);
}

#[test]
fn public_only_renders_while_loading_or_signed_out() {
    assert_eq!(public_only_decision(&state_with(None, true)), GuardDecision::Render);
    assert_eq!(public_only_decision(&state_with(Some(AccountType::Farmer), true)), GuardDecision::Render);
    assert_eq!(public_only_decision(&state_with(None, false)), GuardDecision::Render);
}

#[test]
fn public_only_sends_signed_in_user_home() {
    assert_eq!(
        public_only_decision(&state_with(Some(AccountType::Agronomist), false)),
        GuardDecision::RedirectTo(AppRoute::Home)
    );
}

#[test]
fn role_mismatch_keeps_page_content_hidden() {
    let farmer = state_with(Some(AccountType::Farmer), false);
    let agronomist = state_with(Some(AccountType::Agronomist), false);
    assert!(!route_content_visible(&farmer, AppRoute::Advisory));
    assert!(!route_content_visible(&agronomist, AppRoute::Farms));
    assert!(!route_content_visible(&agronomist, AppRoute::Pastures));
    assert!(!route_content_visible(&agronomist, AppRoute::Drones));
    assert!(route_content_visible(&farmer, AppRoute::Farms));
    assert!(route_content_visible(&agronomist, AppRoute::Advisory));
}

#[test]
fn page_content_visible_only_when_session_admits_route() {
    for account_type in [None, Some(AccountType::Farmer), Some(AccountType::Agronomist)] {
        for loading in [true, false] {
            let state = state_with(account_type, loading);
            for route in AppRoute::ALL.into_iter().filter(|route| !route.is_public()) {
                let expected = !loading && account_type.is_some_and(|role| route.admits(role));
                assert_eq!(route_content_visible(&state, route), expected, "{route:?} {account_type:?} loading={loading}");
            }
        }
    }
}
